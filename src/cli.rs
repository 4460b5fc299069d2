//! Command-line interface for cats_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cat's Game - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "cats_game")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the view configuration file
    #[arg(short, long, global = true, default_value = "cats_game.toml")]
    pub config: PathBuf,

    /// Override the log file from the configuration
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal UI
    Tui,

    /// Apply a sequence of moves and print the resulting board
    Script {
        /// Board indices (0-8) in play order, X first
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}
