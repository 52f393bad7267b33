//! # Mentorship Payouts
//!
//! Outbound adapters for the two payout providers:
//! - `bank` - instant bank transfers to stored mentor accounts
//! - `links` - claimable payout links for payees identified by phone
//!
//! Both clients implement exactly-once semantics at this layer: a call is
//! attempted once, and any non-success response or transport failure is
//! surfaced as an opaque [`ProviderError`](mentorship_types::ProviderError)
//! whose detail lives only in the logs, keyed by a correlation id.

pub mod bank;
pub mod config;
pub mod gateway;
pub mod links;

pub use bank::BankTransferClient;
pub use config::PayoutConfig;
pub use gateway::PayoutGateway;
pub use links::PayoutLinkClient;

use uuid::Uuid;

/// Generates the idempotency key attached to one outbound payout call.
///
/// Fresh per call: since no retry exists anywhere in the pipeline, a
/// random key is sufficient. If retries are ever introduced, keys must
/// instead be derived from the triggering meeting so a retried request
/// collapses into the original payout.
pub(crate) fn fresh_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}
