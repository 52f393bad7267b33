//! Meeting Application Service
//!
//! Orchestrates the meeting-completed pipeline through the repository and
//! payout ports. Contains NO infrastructure logic - pure business
//! orchestration.

use mentorship_types::{
    AppError, BankTransfer, FormEvent, MatchId, Meeting, MeetingRepository, MentorId,
    NewMeeting, PayoutClient, PayoutLink, SendPayoutRequest, MEETING_PAYOUT_AMOUNT,
};

/// Outcome of one processed meeting event.
///
/// Soft misses are ordinary values, not errors: the meeting is already
/// recorded and counted by the time resolution runs, and a match without
/// a routable payment is a legitimate business state reported as a 400.
#[derive(Debug)]
pub enum MeetingOutcome {
    /// Meeting recorded, counter bumped, mentor paid.
    Paid {
        meeting: Meeting,
        transfer: BankTransfer,
    },
    /// No mentor is associated with the match. Recorded but unpaid.
    MentorNotFound { match_id: MatchId },
    /// The mentor has no payment account on file. Recorded but unpaid.
    PaymentAccountNotFound { mentor_id: MentorId },
}

/// Application service for the meeting-intake-to-payout pipeline.
///
/// Generic over `R: MeetingRepository` and `P: PayoutClient` - adapters
/// are injected at compile time. This enables:
/// - Swapping adapters without code changes
/// - Testing with in-memory ports
/// - Compile-time checks for port implementation
pub struct MeetingService<R: MeetingRepository, P: PayoutClient> {
    repo: R,
    payouts: P,
}

impl<R: MeetingRepository, P: PayoutClient> MeetingService<R, P> {
    /// Creates a new service over the given adapters.
    pub fn new(repo: R, payouts: P) -> Self {
        Self { repo, payouts }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Processes one "meeting completed" form submission end to end:
    /// map fields, persist + count atomically, resolve mentor and payment
    /// account, pay out the fixed program amount.
    ///
    /// Steps run strictly in order; a failure at any step short-circuits
    /// the rest without rolling back what already committed. In
    /// particular the counter increment survives a later soft miss -
    /// recording of work is deliberately decoupled from payment success.
    pub async fn handle_meeting_event(
        &self,
        event: &FormEvent,
    ) -> Result<MeetingOutcome, AppError> {
        let new = NewMeeting::from_fields(&event.data.fields)?;

        // Persist the meeting and bump meetings_completed in one store
        // transaction; nothing below runs if this fails.
        let meeting = self.repo.record_meeting(new).await?;
        tracing::info!(match_id = %meeting.match_id, meeting_id = %meeting.id, "meeting recorded");

        let Some(mentor_id) = self.repo.mentor_for_match(meeting.match_id).await? else {
            tracing::warn!(match_id = %meeting.match_id, "no mentor for match, skipping payout");
            return Ok(MeetingOutcome::MentorNotFound {
                match_id: meeting.match_id,
            });
        };

        let Some(account) = self.repo.payment_account_for_mentor(mentor_id).await? else {
            tracing::warn!(%mentor_id, "mentor has no payment account, skipping payout");
            return Ok(MeetingOutcome::PaymentAccountNotFound { mentor_id });
        };

        let transfer = self
            .payouts
            .send_bank_transfer(&account, MEETING_PAYOUT_AMOUNT)
            .await?;
        tracing::info!(transfer_id = %transfer.id, %mentor_id, "meeting payout sent");

        Ok(MeetingOutcome::Paid { meeting, transfer })
    }

    /// Requests a claimable payout link for a payee identified by phone.
    pub async fn send_payout_link(&self, req: SendPayoutRequest) -> Result<PayoutLink, AppError> {
        if req.amount <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }

        self.payouts
            .send_payout_link(req.amount, &req.phone_number)
            .await
            .map_err(Into::into)
    }
}
