//! Ranking-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ItemId};

/// Ranking-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// Referenced item was not found.
    ItemNotFound(ItemId),
    /// Voter is not in the authorized set.
    NotAuthorized,
    /// This voter already judged this pair.
    AlreadyVoted,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RankingError {
    pub fn item_not_found(id: ItemId) -> Self {
        RankingError::ItemNotFound(id)
    }

    pub fn not_authorized() -> Self {
        RankingError::NotAuthorized
    }

    pub fn already_voted() -> Self {
        RankingError::AlreadyVoted
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RankingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RankingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            RankingError::NotAuthorized => ErrorCode::VoterNotAuthorized,
            RankingError::AlreadyVoted => ErrorCode::AlreadyVoted,
            RankingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RankingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RankingError::ItemNotFound(id) => format!("Item not found: {}", id),
            RankingError::NotAuthorized => "Voter is not authorized".to_string(),
            RankingError::AlreadyVoted => "This pair was already voted on".to_string(),
            RankingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RankingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RankingError {}

impl From<DomainError> for RankingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ItemNotFound => {
                match err.details.get("item_id").cloned().and_then(|id| ItemId::new(id).ok()) {
                    Some(id) => RankingError::ItemNotFound(id),
                    None => RankingError::Infrastructure(err.to_string()),
                }
            }
            ErrorCode::VoterNotAuthorized => RankingError::NotAuthorized,
            ErrorCode::AlreadyVoted => RankingError::AlreadyVoted,
            ErrorCode::ValidationFailed => RankingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => RankingError::Infrastructure(err.to_string()),
        }
    }
}
