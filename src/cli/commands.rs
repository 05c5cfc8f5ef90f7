//! CLI command implementations

use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::table::shared;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write a default configuration file
pub fn init(config_path: &Path) -> CliResult<()> {
    Config::write_default(config_path)?;

    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigWritten, &[("path", path.as_str())]);
    Ok(())
}

/// Load configuration, connect the table, and serve until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let result = boot_and_serve(config_path, port);
    if let Err(e) = &result {
        log_event_with_fields(Event::BootFailed, &[("reason", e.message())]);
    }
    result
}

fn boot_and_serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;

    let port_str = config.http.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("backend", config.storage.backend.as_str()),
            ("port", port_str.as_str()),
            ("table", config.storage.table_name.as_str()),
        ],
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = shared::init(&config.storage).await?;
        log_event_with_fields(Event::StoreReady, &[("backend", store.backend())]);

        HttpServer::with_config(config.http.clone(), store)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// File (or defaults), then environment, then the `--port` flag
fn load_config(config_path: &Path, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::load_or_default(config_path)?;
    config.apply_env()?;

    if let Some(port) = port {
        config.http.port = port;
    }

    config.validate()?;
    Ok(config)
}
