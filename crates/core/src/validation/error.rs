//! Error types for the validation gate.

use ledgerline_shared::AppError;
use thiserror::Error;

/// Errors that can occur while a gate gathers its inputs.
///
/// A failed business rule is never one of these; it comes back as a
/// rejecting verdict.
#[derive(Debug, Error)]
pub enum GateError {
    /// Underlying data source failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GateError {
    /// Stable machine-readable error code
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "GATE_STORAGE_ERROR",
        }
    }

    /// HTTP status code this error maps to
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Storage(_) => 500,
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        let message = err.to_string();
        match err {
            GateError::Storage(_) => Self::Storage(message),
        }
    }
}
