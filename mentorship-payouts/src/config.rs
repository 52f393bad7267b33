//! Payout provider credentials and endpoints.

use mentorship_types::ProviderError;

pub const DEFAULT_LINK_API_URL: &str =
    "https://pls.senddotssandbox.com/api/v2/payouts/send-payout";

/// Credentials and endpoints for both payout providers.
///
/// Built once at startup from the environment and injected into the
/// adapters, so a missing credential fails the process early instead of
/// failing the first payout at runtime.
#[derive(Debug, Clone)]
pub struct PayoutConfig {
    /// Base URL of the bank-transfer provider API.
    pub bank_api_url: String,
    /// Bearer token for the bank-transfer provider.
    pub bank_api_token: String,
    /// Send-payout endpoint of the payout-link provider.
    pub link_api_url: String,
    /// Client id half of the payout-link provider's basic-auth pair.
    pub link_client_id: String,
    /// API token half of the payout-link provider's basic-auth pair.
    pub link_api_token: String,
}

impl PayoutConfig {
    /// Validates that every credential is present.
    pub fn validate(&self) -> Result<(), ProviderError> {
        let required = [
            &self.bank_api_url,
            &self.bank_api_token,
            &self.link_api_url,
            &self.link_client_id,
            &self.link_api_token,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(ProviderError::MissingCredentials);
        }
        Ok(())
    }
}
