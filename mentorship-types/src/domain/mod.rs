//! Domain models for the mentorship payout service.

pub mod meeting;
pub mod mentorship;
pub mod payout;

pub use meeting::{Meeting, MeetingId, NewMeeting};
pub use mentorship::{MatchId, MentorId, PaymentAccountId};
pub use payout::{BankTransfer, Delivery, Payee, PayoutLink, PhoneNumber, MEETING_PAYOUT_AMOUNT};
