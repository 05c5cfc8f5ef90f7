//! Gateway Configuration
//!
//! Where the gateway listens and which browser origins may call it.
//!
//! Browsers send `Origin` as `scheme://host[:port]` and CORS compares it
//! byte for byte, so a configured origin with a path or trailing slash
//! would never match. Such entries are rejected when the config is
//! validated instead of silently denying every preflight.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid `http` section
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayConfigError {
    #[error("http.port must be > 0")]
    ZeroPort,

    #[error("http.host must not be empty")]
    EmptyHost,

    #[error("http.cors_origins: '{0}' is not an origin (expected http[s]://host[:port])")]
    InvalidOrigin(String),
}

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Interface to listen on; a hostname is resolved at bind time
    pub host: String,

    pub port: u16,

    /// Origins allowed by CORS preflight. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            // Vite dev server
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

impl HttpServerConfig {
    /// `host:port` as handed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS origins, or `None` when any origin is allowed
    pub fn allowed_origins(&self) -> Result<Option<Vec<HeaderValue>>, GatewayConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        self.cors_origins
            .iter()
            .map(|origin| parse_origin(origin))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn validate(&self) -> Result<(), GatewayConfigError> {
        if self.port == 0 {
            return Err(GatewayConfigError::ZeroPort);
        }

        if self.host.trim().is_empty() {
            return Err(GatewayConfigError::EmptyHost);
        }

        self.allowed_origins()?;
        Ok(())
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, GatewayConfigError> {
    let invalid = || GatewayConfigError::InvalidOrigin(origin.to_string());

    let (scheme, authority) = origin.split_once("://").ok_or_else(invalid)?;
    if !matches!(scheme, "http" | "https") || authority.is_empty() || authority.contains('/') {
        return Err(invalid());
    }

    HeaderValue::from_str(origin).map_err(|_| invalid())
}
