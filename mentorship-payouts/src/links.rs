//! Payout-link provider client.

use serde::Serialize;
use tracing::{error, instrument};
use uuid::Uuid;

use mentorship_types::{PayoutLink, PhoneNumber, ProviderError};

use crate::fresh_idempotency_key;

/// Client for the payout-link provider.
///
/// Requests a claimable payment link for a payee identified by phone
/// number. Compliance-information collection is always forced and the
/// transaction marked tax-exempt; the payout fee is carried by the
/// platform. Auth is HTTP basic from the client id and API token.
#[derive(Clone)]
pub struct PayoutLinkClient {
    http: reqwest::Client,
    api_url: String,
    client_id: String,
    api_token: String,
}

#[derive(Serialize)]
struct SendPayoutLinkRequest<'a> {
    amount: i64,
    payee: &'a PhoneNumber,
    force_collect_compliance_information: bool,
    // TODO: flip to false only in the sandbox once production tax handling lands
    tax_exempt: bool,
    idempotency_key: String,
    payout_fee_party: &'static str,
}

impl PayoutLinkClient {
    pub fn new(
        http: reqwest::Client,
        api_url: String,
        client_id: String,
        api_token: String,
    ) -> Self {
        Self {
            http,
            api_url,
            client_id,
            api_token,
        }
    }

    /// Requests one payout link for `amount` to `payee`.
    ///
    /// Provider error detail stays in the logs; callers receive an opaque
    /// error carrying the correlation id logged here.
    #[instrument(skip(self, payee))]
    pub async fn send_payout(
        &self,
        amount: i64,
        payee: &PhoneNumber,
    ) -> Result<PayoutLink, ProviderError> {
        let correlation_id = Uuid::new_v4();
        let payload = SendPayoutLinkRequest {
            amount,
            payee,
            force_collect_compliance_information: true,
            tax_exempt: true,
            idempotency_key: fresh_idempotency_key(),
            payout_fee_party: "platform",
        };

        let response = self
            .http
            .post(&self.api_url)
            .basic_auth(&self.client_id, Some(&self.api_token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(%correlation_id, error = %e, "payout link request failed");
                ProviderError::Request { correlation_id }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%correlation_id, %status, %body, "payout link rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                correlation_id,
            });
        }

        response.json::<PayoutLink>().await.map_err(|e| {
            error!(%correlation_id, error = %e, "payout link response unreadable");
            ProviderError::Request { correlation_id }
        })
    }
}
