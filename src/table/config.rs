//! Table Configuration
//!
//! Which backend to use and, for the managed table, how to reach it.

use serde::{Deserialize, Serialize};

use super::errors::{StorageError, StorageResult};

/// Table backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process table, lost on exit
    Memory,
    /// Managed DynamoDB table (requires the `dynamodb` feature)
    Dynamodb,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Dynamodb => "dynamodb",
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use (default: "memory")
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    /// Table name (default: "coffee")
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Region override; SDK default when absent
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override (e.g. a local emulator)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-operation timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_backend() -> StorageBackend {
    StorageBackend::Memory
}

fn default_table_name() -> String {
    "coffee".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            table_name: default_table_name(),
            region: None,
            endpoint: None,
            timeout_ms: None,
        }
    }
}

impl StorageConfig {
    /// Reject configurations no backend can be built from
    pub fn validate(&self) -> StorageResult<()> {
        if self.table_name.trim().is_empty() {
            return Err(StorageError::Config("table_name must not be empty".into()));
        }

        if self.timeout_ms == Some(0) {
            return Err(StorageError::Config("timeout_ms must be > 0".into()));
        }

        if self.backend == StorageBackend::Dynamodb && !cfg!(feature = "dynamodb") {
            return Err(StorageError::Config(
                "backend 'dynamodb' requires building with the 'dynamodb' feature".into(),
            ));
        }

        Ok(())
    }
}
