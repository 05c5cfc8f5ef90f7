//! # Model Errors

use thiserror::Error;

/// Result type for body validation
pub type ModelResult<T> = Result<T, ModelError>;

/// Validation failures raised while decoding a request body
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Body absent or empty
    #[error("Request body is required")]
    MissingBody,

    /// Body is not valid JSON or does not match the schema
    #[error("Invalid request body: {0}")]
    Malformed(String),

    /// A required field is present but blank
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Update body carries no updatable field
    #[error("Update must set at least one of: name, price, available")]
    EmptyPatch,

    /// Update body tries to change the primary key
    #[error("Field 'id' cannot be changed (path id '{path}', body id '{body}')")]
    IdMismatch { path: String, body: String },
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
