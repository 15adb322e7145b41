//! Codebreaker - Unified CLI
//!
//! Code-breaking puzzle server with an HTTP mode and a local play mode.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use codebreaker::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => run_server(host, port, config).await,
        Command::Play => run_play(),
    }
}

/// Run the HTTP server
async fn run_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!(host = %config.host, port = config.port, "Starting codebreaker server");
    codebreaker::run(config).await
}

/// Run a local game in the terminal
fn run_play() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    codebreaker::play_local()
}
