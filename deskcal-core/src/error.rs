//! Error types for deskcal.

use thiserror::Error;

/// Errors that can occur in deskcal operations.
#[derive(Error, Debug)]
pub enum DeskcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Unknown category '{0}'. Expected one of: personal, work, holiday, birthday")]
    UnknownCategory(String),

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for deskcal operations.
pub type DeskcalResult<T> = Result<T, DeskcalError>;
