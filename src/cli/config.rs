//! Configuration file
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 3000, "cors_origins": ["http://localhost:5173"] },
//!   "storage": { "backend": "memory", "table_name": "coffee" }
//! }
//! ```
//!
//! Every field has a default. `COFFEE_TABLE_NAME` and `COFFEE_PORT`
//! override the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::table::StorageConfig;

use super::errors::{CliError, CliResult};

pub const ENV_TABLE_NAME: &str = "COFFEE_TABLE_NAME";
pub const ENV_PORT: &str = "COFFEE_PORT";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load configuration from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> CliResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table_name) = lookup(ENV_TABLE_NAME) {
            self.storage.table_name = table_name;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid {}: '{}'", ENV_PORT, port)))?;
        }

        Ok(())
    }

    /// Validate the combined configuration
    pub fn validate(&self) -> CliResult<()> {
        self.http.validate()?;
        self.storage.validate()?;

        Ok(())
    }

    /// Write the default configuration to `path`, refusing to overwrite
    pub fn write_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            return Err(CliError::already_initialized(path));
        }

        let config = Self::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(path, content + "\n")?;

        Ok(config)
    }
}
