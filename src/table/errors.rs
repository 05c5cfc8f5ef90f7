//! # Table Errors

use thiserror::Error;

/// Result type for table operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by a table backend
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Conditional update found no record with this id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Any failure reported by the backend, carried verbatim
    #[error("{0}")]
    Backend(String),

    /// A stored record could not be decoded into an item
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// Backend cannot be built from the given configuration
    #[error("Invalid storage configuration: {0}")]
    Config(String),
}

impl StorageError {
    /// Wrap a backend failure
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
