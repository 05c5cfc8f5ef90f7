//! # Handler Errors
//!
//! Every failure a handler can hit maps to one of three outcomes.

use serde::Serialize;
use thiserror::Error;

use crate::model::ModelError;
use crate::table::StorageError;

use super::envelope::{build_response, Envelope};

/// Result type for handler bodies
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Handler errors
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// Missing or malformed field, path parameter or body
    #[error("{0}")]
    Validation(String),

    /// Target record absent
    #[error("Item {0} not found")]
    NotFound(String),

    /// Any other failure from the table, message passed through
    #[error("{0}")]
    Storage(String),
}

impl HandlerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Storage(_) => 500,
        }
    }

    /// Render as a response envelope
    pub fn into_envelope(self) -> Envelope {
        build_response(self.status_code(), &ErrorBody::from(self))
    }
}

impl From<ModelError> for HandlerError {
    fn from(e: ModelError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<StorageError> for HandlerError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<HandlerError> for ErrorBody {
    fn from(err: HandlerError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
