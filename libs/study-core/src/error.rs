//! Error types for study-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using StudyError.
pub type Result<T> = std::result::Result<T, StudyError>;

/// Errors raised by scheduling, deck bookkeeping and settings loading.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("confidence {value} is outside 1..=5")]
    InvalidConfidence { value: i64 },

    #[error("repetition level {value} is below 1")]
    InvalidRepetitionLevel { value: u32 },

    #[error("card {id} is scheduled before its last review")]
    MalformedCard { id: Uuid },

    #[error("card {id} not found")]
    CardNotFound { id: Uuid },

    #[error("review date {days} days ahead is out of range")]
    DateOutOfRange { days: u64 },

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
