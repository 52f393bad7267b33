//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use mentorship_types::{MeetingRepository, PayoutClient, RoleChecker};

use super::handlers::{self, AppState};
use crate::MeetingService;

/// HTTP Server for the mentorship payout API.
pub struct HttpServer<R: MeetingRepository, P: PayoutClient> {
    state: Arc<AppState<R, P>>,
}

impl<R: MeetingRepository, P: PayoutClient> HttpServer<R, P> {
    /// Creates a new HTTP server with the given service and role checker.
    pub fn new(service: MeetingService<R, P>, roles: Arc<dyn RoleChecker>) -> Self {
        Self {
            state: Arc::new(AppState { service, roles }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/health", get(handlers::health))
            .route("/meetings", post(handlers::receive_meeting::<R, P>))
            .route("/dots/sendPayout", post(handlers::send_payout::<R, P>))
            .route("/admin/dashboard", get(handlers::admin_dashboard::<R, P>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
