//! Database row types and conversions to domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use mentorship_types::{MatchId, Meeting, MeetingId, NewMeeting, RepoError};

/// Raw meetings row.
#[derive(Debug, FromRow)]
pub(crate) struct DbMeeting {
    pub id: i64,
    pub match_id: i64,
    pub estimated_time: f64,
    pub meeting_notes: String,
    pub created_at: String,
}

impl DbMeeting {
    pub(crate) fn into_domain(self) -> Result<Meeting, RepoError> {
        let created_at = parse_timestamp(&self.created_at)?;
        Ok(Meeting::from_parts(
            MeetingId::new(self.id),
            NewMeeting {
                match_id: MatchId::new(self.match_id),
                estimated_time: self.estimated_time,
                meeting_notes: self.meeting_notes,
            },
            created_at,
        ))
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Database(format!("invalid timestamp '{raw}': {e}")))
}
