//! Cat's Game - terminal front end for the tic-tac-toe rules engine.
//!
//! The rules live in [`cats_game_engine`]; this crate is the view layer. It
//! owns one engine, subscribes to its state changes and renders the board,
//! the status line and the restart control with ratatui.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with view settings
//! - **TUI**: keyboard-driven board, status and restart control
//! - **Script**: headless play for a fixed list of moves
//!
//! # Example
//!
//! ```
//! use cats_game::run_script;
//!
//! let report = run_script(&[0, 4, 8]).unwrap();
//! assert!(report.ends_with("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod script;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, ViewConfig};

// Crate-level exports - Headless play
pub use script::run_script;

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Direction, draw, map_key, move_cursor, run_tui};
