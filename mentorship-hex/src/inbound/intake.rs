//! Webhook intake wrapper.
//!
//! The single point where unstructured failures become a bounded HTTP
//! response. The raw body is parsed into the typed envelope and handed to
//! the typed handler; any error from either step is logged with a
//! correlation id and collapsed to a generic 500 so nothing escapes to
//! the transport layer. Soft-miss responses produced by the handler pass
//! through untouched.

use std::future::Future;

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use mentorship_types::AppError;

/// Parses `body` as JSON into `T` and dispatches to `handler`.
pub async fn intake<T, F, Fut>(body: Bytes, handler: F) -> Response
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<Response, AppError>>,
{
    let correlation_id = Uuid::new_v4();

    let parsed: T = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(%correlation_id, error = %e, "webhook payload failed to parse");
            return internal_error();
        }
    };

    match handler(parsed).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(%correlation_id, error = %e, "webhook handler failed");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}
