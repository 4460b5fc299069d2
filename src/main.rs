//! Cat's Game - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use cats_game::{ViewConfig, run_script, run_tui};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ViewConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    initialize_tracing(&config)?;

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Script { positions } => {
            let report = run_script(&positions)?;
            println!("{}", report);
            Ok(())
        }
    }
}

/// Sends tracing output to the configured log file so it never
/// interleaves with the terminal UI.
fn initialize_tracing(config: &ViewConfig) -> Result<()> {
    let log_file = config.open_log_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}
