//! # Mentorship Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter and the payout gateway
//! - Create the meeting service
//! - Start the HTTP server

mod config;
mod roles;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mentorship_hex::{MeetingService, inbound::HttpServer};
use mentorship_payouts::PayoutGateway;
use mentorship_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mentorship_app=debug,mentorship_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; payout credentials are checked here, at startup
    let config = config::Config::from_env()?;

    tracing::info!("Starting mentorship server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    // Build the payout gateway (validates credentials)
    let gateway = PayoutGateway::new(config.payouts)?;

    // Create the meeting service
    let service = MeetingService::new(repo, gateway);

    // Create and run the HTTP server
    let checker = Arc::new(roles::ConfigRoleChecker::new(config.admin_identities));
    let server = HttpServer::new(service, checker);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
