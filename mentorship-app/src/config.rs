//! Configuration loading from environment.

use std::env;

use mentorship_payouts::{config::DEFAULT_LINK_API_URL, PayoutConfig};

/// Application configuration.
///
/// Payout credentials are part of startup configuration on purpose: a
/// missing token fails the process here instead of failing the first
/// payout hours later.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub payouts: PayoutConfig,
    /// Identities granted the "admin" role, from ADMIN_IDENTITIES
    /// (comma separated).
    pub admin_identities: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let payouts = PayoutConfig {
            bank_api_url: env::var("BANK_API_URL")
                .map_err(|_| anyhow::anyhow!("BANK_API_URL environment variable is required"))?,
            bank_api_token: env::var("BANK_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("BANK_API_TOKEN environment variable is required"))?,
            link_api_url: env::var("DOTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_LINK_API_URL.to_string()),
            link_client_id: env::var("DOTS_CLIENT_ID")
                .map_err(|_| anyhow::anyhow!("DOTS_CLIENT_ID environment variable is required"))?,
            link_api_token: env::var("DOTS_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("DOTS_API_TOKEN environment variable is required"))?,
        };

        let admin_identities = env::var("ADMIN_IDENTITIES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            port,
            database_url,
            payouts,
            admin_identities,
        })
    }
}
