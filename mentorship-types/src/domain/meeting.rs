//! Meeting domain model and webhook field mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mentorship::MatchId;
use crate::dto::EventField;
use crate::error::DomainError;

/// Unique identifier for a recorded meeting (assigned by the store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(i64);

impl MeetingId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A meeting as reported by the form webhook, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub match_id: MatchId,
    pub estimated_time: f64,
    pub meeting_notes: String,
}

impl NewMeeting {
    /// Maps a webhook field list to a meeting record.
    ///
    /// Fields are matched by label against the fixed set
    /// `matchId` / `estimatedTime` / `meetingNotes`; any other label is
    /// ignored so new form fields don't break intake. `matchId` is coerced
    /// to an integer whether the form sends it as a string or a number.
    ///
    /// Fails with [`DomainError::MissingFields`] if any of the three is
    /// absent after scanning the whole list.
    pub fn from_fields(fields: &[EventField]) -> Result<Self, DomainError> {
        let mut match_id: Option<MatchId> = None;
        let mut estimated_time: Option<f64> = None;
        let mut meeting_notes: Option<String> = None;

        for field in fields {
            match field.label.as_str() {
                "matchId" => match_id = coerce_integer(&field.value).map(MatchId::new),
                "estimatedTime" => estimated_time = coerce_number(&field.value),
                "meetingNotes" => meeting_notes = field.value.as_str().map(str::to_owned),
                _ => {}
            }
        }

        match (match_id, estimated_time, meeting_notes) {
            (Some(match_id), Some(estimated_time), Some(meeting_notes)) => Ok(Self {
                match_id,
                estimated_time,
                meeting_notes,
            }),
            _ => Err(DomainError::MissingFields),
        }
    }
}

fn coerce_integer(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A persisted meeting record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub match_id: MatchId,
    pub estimated_time: f64,
    pub meeting_notes: String,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// Reconstructs a meeting from stored parts.
    pub fn from_parts(
        id: MeetingId,
        new: NewMeeting,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            match_id: new.match_id,
            estimated_time: new.estimated_time,
            meeting_notes: new.meeting_notes,
            created_at,
        }
    }
}
