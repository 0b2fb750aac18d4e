//! Error types for document numbering.

use ledgerline_shared::AppError;
use thiserror::Error;

/// Errors that can occur while deriving or reserving document numbers.
///
/// Running out of documents to scan is not an error; an empty index
/// simply starts the sequence at one.
#[derive(Debug, Error)]
pub enum NumberingError {
    /// Underlying document index failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl NumberingError {
    /// Stable machine-readable error code
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "NUMBERING_STORAGE_ERROR",
        }
    }

    /// HTTP status code this error maps to
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Storage(_) => 500,
        }
    }
}

impl From<NumberingError> for AppError {
    fn from(err: NumberingError) -> Self {
        let message = err.to_string();
        match err {
            NumberingError::Storage(_) => Self::Storage(message),
        }
    }
}
