//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use mentorship_types::{
    MatchId, Meeting, MeetingRepository, MentorId, NewMeeting, PaymentAccountId, RepoError,
};

use crate::types::DbMeeting;

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts a mentor. Mentors are normally managed by the program's
    /// admin tooling; this exists for seeding and tests.
    pub async fn create_mentor(
        &self,
        name: &str,
        payment_account_id: Option<&PaymentAccountId>,
    ) -> Result<MentorId, RepoError> {
        let created_at = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"INSERT INTO mentors (name, payment_account_id, created_at) VALUES (?, ?, ?)"#,
        )
        .bind(name)
        .bind(payment_account_id.map(PaymentAccountId::as_str))
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(MentorId::new(result.last_insert_rowid()))
    }

    /// Inserts a match for a mentor. Seeding/test helper, same as
    /// [`create_mentor`](Self::create_mentor).
    pub async fn create_match(
        &self,
        mentor_id: MentorId,
        mentee_name: &str,
    ) -> Result<MatchId, RepoError> {
        let created_at = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"INSERT INTO matches (mentor_id, mentee_name, meetings_completed, created_at) VALUES (?, ?, 0, ?)"#,
        )
        .bind(mentor_id.as_i64())
        .bind(mentee_name)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(MatchId::new(result.last_insert_rowid()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl MeetingRepository for SqliteRepo {
    async fn record_meeting(&self, new: NewMeeting) -> Result<Meeting, RepoError> {
        let created_at = chrono::Utc::now();
        let created_at_str = created_at.to_rfc3339();

        // Insert + counter increment commit together or not at all.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let result = sqlx::query(
            r#"INSERT INTO meetings (match_id, estimated_time, meeting_notes, created_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(new.match_id.as_i64())
        .bind(new.estimated_time)
        .bind(&new.meeting_notes)
        .bind(&created_at_str)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        sqlx::query(
            r#"UPDATE matches SET meetings_completed = meetings_completed + 1 WHERE id = ?"#,
        )
        .bind(new.match_id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let id = mentorship_types::MeetingId::new(result.last_insert_rowid());
        tracing::debug!(meeting_id = %id, match_id = %new.match_id, "meeting row committed");
        Ok(Meeting::from_parts(id, new, created_at))
    }

    async fn mentor_for_match(&self, match_id: MatchId) -> Result<Option<MentorId>, RepoError> {
        let row: Option<(i64,)> = sqlx::query_as(r#"SELECT mentor_id FROM matches WHERE id = ?"#)
            .bind(match_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(|(id,)| MentorId::new(id)))
    }

    async fn payment_account_for_mentor(
        &self,
        mentor_id: MentorId,
    ) -> Result<Option<PaymentAccountId>, RepoError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as(r#"SELECT payment_account_id FROM mentors WHERE id = ?"#)
                .bind(mentor_id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        // A mentor without a stored account is the same soft miss as no mentor.
        Ok(row.and_then(|(account,)| account.map(PaymentAccountId::new)))
    }

    async fn meetings_completed(&self, match_id: MatchId) -> Result<Option<i64>, RepoError> {
        let row: Option<(i64,)> =
            sqlx::query_as(r#"SELECT meetings_completed FROM matches WHERE id = ?"#)
                .bind(match_id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(|(count,)| count))
    }
}

// Fetch helpers used by tests and ops queries.
impl SqliteRepo {
    /// Lists meetings recorded for a match, newest first.
    pub async fn meetings_for_match(&self, match_id: MatchId) -> Result<Vec<Meeting>, RepoError> {
        let rows: Vec<DbMeeting> = sqlx::query_as(
            r#"SELECT id, match_id, estimated_time, meeting_notes, created_at
               FROM meetings WHERE match_id = ? ORDER BY created_at DESC"#,
        )
        .bind(match_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbMeeting::into_domain).collect()
    }
}
