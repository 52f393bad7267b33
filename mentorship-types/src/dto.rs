//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::PhoneNumber;

// ─────────────────────────────────────────────────────────────────────────────
// Inbound webhook envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Envelope delivered by the form provider's webhook.
///
/// Not owned by this system; unknown fields are tolerated and the
/// interesting data lives in `data.fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEvent {
    #[serde(rename = "eventId")]
    pub event_id: String,
    /// Always "FORM_RESPONSE" for the submissions this service handles.
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    #[serde(rename = "responseId")]
    pub response_id: String,
    #[serde(rename = "submissionId")]
    pub submission_id: String,
    #[serde(rename = "respondentId")]
    pub respondent_id: String,
    #[serde(rename = "formId")]
    pub form_id: String,
    #[serde(rename = "formName")]
    pub form_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub fields: Vec<EventField>,
}

/// One answered form field. `value` arrives as a string or a number
/// depending on the field type, so it stays a raw JSON value until the
/// domain mapping coerces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventField {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: serde_json::Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payout trigger
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the manual payout-link trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPayoutRequest {
    pub amount: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: PhoneNumber,
}

// ─────────────────────────────────────────────────────────────────────────────
// Acknowledgements
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed-shape acknowledgement returned to the webhook sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
    /// Always null; the sender ignores it but expects the key.
    pub data: Option<serde_json::Value>,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
