//! coffee-api - CRUD service for coffee items
//!
//! Four stateless request handlers over a key-value table, plus a local
//! HTTP gateway that routes to them.

pub mod cli;
pub mod handlers;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod table;
