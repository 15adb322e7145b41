//! Command-line interface for codebreaker.

use clap::{Parser, Subcommand};

/// Codebreaker - code-breaking puzzle server
#[derive(Parser, Debug)]
#[command(name = "codebreaker")]
#[command(about = "Code-breaking puzzle server with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play a game in the terminal against a locally generated secret
    Play,
}
