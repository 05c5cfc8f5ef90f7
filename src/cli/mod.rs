//! CLI module for the coffee service
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Connect the table and run the HTTP gateway

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::{Config, ENV_PORT, ENV_TABLE_NAME};
pub use errors::{CliError, CliErrorCode, CliResult};
