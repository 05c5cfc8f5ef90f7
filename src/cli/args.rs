//! CLI argument definitions using clap
//!
//! Commands:
//! - coffee init --config <path>
//! - coffee serve --config <path> [--port <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Coffee API - CRUD service for coffee items
#[derive(Parser, Debug)]
#[command(name = "coffee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./coffee.json")]
        config: PathBuf,
    },

    /// Start the HTTP gateway
    Serve {
        /// Path to configuration file (defaults are used if it is missing)
        #[arg(long, default_value = "./coffee.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
