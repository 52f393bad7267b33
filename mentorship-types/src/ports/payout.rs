//! Payout client port.
//!
//! Two payout paths, unified only by "send a fixed amount to a payee
//! identifier". Implementations attach auth and idempotency keys and
//! normalize provider responses.

use crate::domain::{BankTransfer, PaymentAccountId, PayoutLink, PhoneNumber};
use crate::error::ProviderError;

/// Port trait for the payment providers.
///
/// Every call is attempted exactly once; retry policy, if ever added,
/// belongs to the caller together with a deterministic idempotency key.
#[async_trait::async_trait]
pub trait PayoutClient: Send + Sync + 'static {
    /// Instant bank transfer to a stored payment account.
    async fn send_bank_transfer(
        &self,
        recipient: &PaymentAccountId,
        amount: i64,
    ) -> Result<BankTransfer, ProviderError>;

    /// Claimable payout link sent to a payee identified by phone number.
    async fn send_payout_link(
        &self,
        amount: i64,
        payee: &PhoneNumber,
    ) -> Result<PayoutLink, ProviderError>;
}
