//! # HTTP Gateway
//!
//! Axum server standing in for the managed HTTP gateway during local
//! development and tests.
//!
//! # Endpoints
//!
//! - `GET /coffee`, `POST /coffee`
//! - `GET|PUT|DELETE /coffee/{id}`
//! - `GET /health`

pub mod coffee_routes;
pub mod config;
pub mod health_routes;
pub mod server;

pub use config::{GatewayConfigError, HttpServerConfig};
pub use server::HttpServer;
