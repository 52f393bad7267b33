//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use mentorship_types::{
    Ack, FormEvent, MeetingRepository, PayoutClient, RoleChecker, SendPayoutRequest,
};

use super::intake::intake;
use crate::{MeetingOutcome, MeetingService};

/// Header carrying the caller identity resolved by the external session
/// layer in front of this service.
pub const IDENTITY_HEADER: &str = "x-identity";

/// Application state shared across handlers.
pub struct AppState<R: MeetingRepository, P: PayoutClient> {
    pub service: MeetingService<R, P>,
    pub roles: Arc<dyn RoleChecker>,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Site root, also the redirect target for rejected admin visits.
pub async fn home() -> impl IntoResponse {
    Html("<h1>Mentorship program</h1>")
}

/// Webhook intake for "meeting completed" form submissions.
#[tracing::instrument(skip(state, body))]
pub async fn receive_meeting<R: MeetingRepository, P: PayoutClient>(
    State(state): State<Arc<AppState<R, P>>>,
    body: Bytes,
) -> Response {
    intake(body, move |event: FormEvent| async move {
        let outcome = state.service.handle_meeting_event(&event).await?;

        Ok(match outcome {
            MeetingOutcome::Paid { .. } => {
                (StatusCode::OK, Json(Ack::new("awesome sauce"))).into_response()
            }
            MeetingOutcome::MentorNotFound { .. } => {
                (StatusCode::BAD_REQUEST, Json(Ack::new("mentorId not found"))).into_response()
            }
            MeetingOutcome::PaymentAccountNotFound { .. } => (
                StatusCode::BAD_REQUEST,
                Json(Ack::new("payment account not found")),
            )
                .into_response(),
        })
    })
    .await
}

/// Manual payout-link trigger.
#[tracing::instrument(skip(state, body))]
pub async fn send_payout<R: MeetingRepository, P: PayoutClient>(
    State(state): State<Arc<AppState<R, P>>>,
    body: Bytes,
) -> Response {
    intake(body, move |req: SendPayoutRequest| async move {
        let link = state.service.send_payout_link(req).await?;
        Ok(Json(link).into_response())
    })
    .await
}

/// Admin dashboard, gated on the "admin" role. Anyone else goes back to
/// the site root.
#[tracing::instrument(skip(state, headers))]
pub async fn admin_dashboard<R: MeetingRepository, P: PayoutClient>(
    State(state): State<Arc<AppState<R, P>>>,
    headers: HeaderMap,
) -> Response {
    let identity = headers
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !state.roles.is_in_role(identity, "admin") {
        return Redirect::to("/").into_response();
    }

    Html(
        "<h1>This is the admin dashboard</h1>\
         <p>This page is restricted to users with the admin role.</p>",
    )
    .into_response()
}
