//! Inbound HTTP adapter.

pub mod handlers;
pub mod intake;
pub mod server;

pub use server::HttpServer;
