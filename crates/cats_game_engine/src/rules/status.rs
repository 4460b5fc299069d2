//! Status derivation for tic-tac-toe.

use crate::{Board, GameStatus, Player};
use tracing::instrument;

/// Summarizes the game for display.
///
/// A winner takes precedence over a full board, so a move that fills the
/// last square and completes a line is a win, not a draw.
#[instrument(level = "trace", skip(board))]
pub fn compute_status(winner: Option<Player>, board: &Board, next_turn: Player) -> GameStatus {
    match winner {
        Some(player) => GameStatus::Won(player),
        None if board.is_full() => GameStatus::Drawn,
        None => GameStatus::InProgress(next_turn),
    }
}
