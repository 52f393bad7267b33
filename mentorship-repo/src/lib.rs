//! # Mentorship Repository
//!
//! Concrete repository adapter for the mentorship payout service.
//! Implements the `MeetingRepository` port on SQLite via sqlx.

pub mod sqlite;

mod types;

#[cfg(test)]
mod sqlite_tests;

pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// Connects, runs migrations, and returns a ready-to-use repo.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://mentorship.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::new(database_url).await
}
