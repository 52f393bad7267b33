//! Bank-transfer provider client.

use serde::Serialize;
use tracing::{error, instrument};
use uuid::Uuid;

use mentorship_types::{BankTransfer, PaymentAccountId, ProviderError};

use crate::fresh_idempotency_key;

/// Client for the instant bank-transfer provider.
///
/// Sends a fixed amount to a recipient account already registered with
/// the provider. One attempt per call; a failed transfer is reported
/// upward and never retried here.
#[derive(Clone)]
pub struct BankTransferClient {
    http: reqwest::Client,
    api_url: String,
    api_token: String,
}

#[derive(Serialize)]
struct SendMoneyRequest<'a> {
    #[serde(rename = "recipientId")]
    recipient_id: &'a str,
    amount: i64,
    #[serde(rename = "idempotencyKey")]
    idempotency_key: String,
}

impl BankTransferClient {
    pub fn new(http: reqwest::Client, api_url: String, api_token: String) -> Self {
        Self {
            http,
            api_url,
            api_token,
        }
    }

    /// Issues one transfer of `amount` to `recipient`.
    #[instrument(skip(self), fields(recipient = %recipient))]
    pub async fn send_money(
        &self,
        recipient: &PaymentAccountId,
        amount: i64,
    ) -> Result<BankTransfer, ProviderError> {
        let correlation_id = Uuid::new_v4();
        let payload = SendMoneyRequest {
            recipient_id: recipient.as_str(),
            amount,
            idempotency_key: fresh_idempotency_key(),
        };

        let response = self
            .http
            .post(format!("{}/send-money", self.api_url))
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(%correlation_id, error = %e, "bank transfer request failed");
                ProviderError::Request { correlation_id }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%correlation_id, %status, %body, "bank transfer rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                correlation_id,
            });
        }

        response.json::<BankTransfer>().await.map_err(|e| {
            error!(%correlation_id, error = %e, "bank transfer response unreadable");
            ProviderError::Request { correlation_id }
        })
    }
}
