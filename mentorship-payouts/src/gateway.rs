//! Unified payout gateway implementing the `PayoutClient` port.

use async_trait::async_trait;

use mentorship_types::{
    BankTransfer, PaymentAccountId, PayoutClient, PayoutLink, PhoneNumber, ProviderError,
};

use crate::{BankTransferClient, PayoutConfig, PayoutLinkClient};

/// Both provider clients behind one port, sharing a connection pool.
#[derive(Clone)]
pub struct PayoutGateway {
    bank: BankTransferClient,
    links: PayoutLinkClient,
}

impl PayoutGateway {
    /// Builds the gateway, failing fast on missing credentials.
    pub fn new(config: PayoutConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let http = reqwest::Client::new();
        Ok(Self {
            bank: BankTransferClient::new(
                http.clone(),
                config.bank_api_url,
                config.bank_api_token,
            ),
            links: PayoutLinkClient::new(
                http,
                config.link_api_url,
                config.link_client_id,
                config.link_api_token,
            ),
        })
    }
}

#[async_trait]
impl PayoutClient for PayoutGateway {
    async fn send_bank_transfer(
        &self,
        recipient: &PaymentAccountId,
        amount: i64,
    ) -> Result<BankTransfer, ProviderError> {
        self.bank.send_money(recipient, amount).await
    }

    async fn send_payout_link(
        &self,
        amount: i64,
        payee: &PhoneNumber,
    ) -> Result<PayoutLink, ProviderError> {
        self.links.send_payout(amount, payee).await
    }
}
