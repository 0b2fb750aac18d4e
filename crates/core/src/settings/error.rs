//! Settings error types.

use ledgerline_shared::AppError;
use ledgerline_shared::types::TenantId;
use thiserror::Error;

/// Errors that can occur during settings operations.
///
/// Policy outcomes (approval required, negative stock disallowed, and so on)
/// are never errors; they surface as verdicts or booleans. These variants
/// cover rejected updates and infrastructure failures only.
#[derive(Debug, Error)]
pub enum SettingsError {
    // ========== Validation Errors ==========
    /// A field in a partial update is outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// The rejected field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    // ========== Lookup Errors ==========
    /// Settings record failed to materialize for the tenant.
    #[error("Settings not found for tenant {0}")]
    NotFound(TenantId),

    // ========== Storage Errors ==========
    /// Storage error from the persistence collaborator.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SettingsError {
    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::NotFound(_) => "SETTINGS_NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidField { .. } => 400,
            Self::NotFound(_) => 404,
            Self::Storage(_) => 500,
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        let message = err.to_string();
        match err {
            SettingsError::InvalidField { .. } => Self::Validation(message),
            SettingsError::NotFound(_) => Self::NotFound(message),
            SettingsError::Storage(_) => Self::Storage(message),
        }
    }
}
