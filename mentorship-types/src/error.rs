//! Error types for the mentorship payout service.

use uuid::Uuid;

/// Domain-level errors (business rule violations in inbound data).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The webhook field list did not contain every required label.
    #[error("Missing required fields: matchId, estimatedTime and/or meetingNotes")]
    MissingFields,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
///
/// A lookup that legitimately finds nothing is NOT an error - those
/// return `Ok(None)` and are handled as soft misses by the service.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Entity not found")]
    NotFound,
}

/// Payout provider errors.
///
/// Provider response detail is logged at the adapter and never surfaced
/// to callers; the correlation id ties the opaque error back to the logs.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API token and/or client id required")]
    MissingCredentials,

    #[error("Payout request failed (correlation id {correlation_id})")]
    Request { correlation_id: Uuid },

    #[error("Payout provider returned {status} (correlation id {correlation_id})")]
    Status { status: u16, correlation_id: Uuid },
}

impl ProviderError {
    /// The correlation id logged alongside the provider's error detail,
    /// if this error carries one.
    pub fn correlation_id(&self) -> Option<Uuid> {
        match self {
            Self::MissingCredentials => None,
            Self::Request { correlation_id } | Self::Status { correlation_id, .. } => {
                Some(*correlation_id)
            }
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingFields => AppError::BadRequest(err.to_string()),
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Transaction(e) => AppError::Internal(e),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Internal(err.to_string())
    }
}
