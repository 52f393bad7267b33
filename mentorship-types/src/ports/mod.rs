//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod auth;
mod payout;
mod repository;

pub use auth::RoleChecker;
pub use payout::PayoutClient;
pub use repository::MeetingRepository;
