//! Custom error types
//!
//! Errors raised while shaping records for, or reading them back from, the
//! document store.

/// Model-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    // Read path errors
    #[error("Document not found: {0}")]
    MissingDocument(String),

    #[error("Expected {0} to serialize as an object")]
    NotAnObject(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl ModelError {
    /// Get error code for client consumption
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDocument(_) => "MISSING_DOCUMENT",
            Self::NotAnObject(_) => "NOT_AN_OBJECT",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvariantViolation(_) => "INVARIANT_VIOLATION",
        }
    }
}

impl From<validator::ValidationErrors> for ModelError {
    fn from(err: validator::ValidationErrors) -> Self {
        ModelError::Validation(err.to_string())
    }
}

/// Result type alias using ModelError
pub type ModelResult<T> = Result<T, ModelError>;
