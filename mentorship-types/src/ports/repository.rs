//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Storage adapters (SQLite, InMemory) implement this trait.

use crate::domain::{MatchId, Meeting, MentorId, NewMeeting, PaymentAccountId};
use crate::error::RepoError;

/// Persistence and lookup port for the meeting pipeline.
///
/// `record_meeting` MUST be atomic: the meeting insert and the match's
/// counter increment either both commit or neither does. The lookups are
/// read-only; `Ok(None)` is a legitimate soft miss, distinct from a
/// `RepoError` signaling an unreachable store.
#[async_trait::async_trait]
pub trait MeetingRepository: Send + Sync + 'static {
    /// Persists a meeting and increments the match's completed-meeting
    /// counter in one store transaction.
    async fn record_meeting(&self, new: NewMeeting) -> Result<Meeting, RepoError>;

    /// Resolves the mentor belonging to a match.
    async fn mentor_for_match(&self, match_id: MatchId) -> Result<Option<MentorId>, RepoError>;

    /// Resolves a mentor's account id at the bank-transfer provider.
    async fn payment_account_for_mentor(
        &self,
        mentor_id: MentorId,
    ) -> Result<Option<PaymentAccountId>, RepoError>;

    /// Current completed-meeting count for a match.
    async fn meetings_completed(&self, match_id: MatchId) -> Result<Option<i64>, RepoError>;
}
