//! # Mentorship Types
//!
//! Domain types and port traits for the mentorship payout service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Meeting, MatchId, PayoutLink)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BankTransfer, MatchId, Meeting, MeetingId, MentorId, NewMeeting, PaymentAccountId,
    PayoutLink, PhoneNumber, MEETING_PAYOUT_AMOUNT,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProviderError, RepoError};
pub use ports::{MeetingRepository, PayoutClient, RoleChecker};
