//! Cat's Game engine - pure tic-tac-toe rules.
//!
//! The engine owns a 3x3 board and derives everything else from it: whose
//! turn it is, whether someone has three in a row, and the status line shown
//! to players. A view layer drives it through [`Game::apply_move`] and
//! [`Game::restart`] and learns about changes through [`Observer`]s.
//!
//! # Example
//!
//! ```
//! use cats_game_engine::{Game, GameStatus, MoveOutcome, Player};
//!
//! let mut game = Game::new();
//! assert!(matches!(game.apply_move(4), Ok(MoveOutcome::Applied { .. })));
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! // Out-of-range positions are the only error.
//! assert!(game.apply_move(9).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod observer;
mod position;
pub mod rules;
mod types;

pub use error::InvalidPosition;
pub use game::{Game, MoveOutcome, Rejection, Snapshot};
pub use observer::{Observer, SubscriptionId};
pub use position::Position;
pub use rules::{WINNING_LINES, compute_next_turn, compute_status, compute_winner};
pub use types::{Board, GameStatus, Player, Square};
