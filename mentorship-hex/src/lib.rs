//! # Mentorship Hex
//!
//! Application service layer and HTTP adapter for the mentorship payout
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (the meeting-event orchestrator)
//! - `inbound/` - HTTP adapter (Axum server, webhook intake wrapper)
//!
//! The service is generic over `R: MeetingRepository` and
//! `P: PayoutClient`, allowing different adapters to be injected.

pub mod inbound;
pub mod service;


pub use service::{MeetingOutcome, MeetingService};
