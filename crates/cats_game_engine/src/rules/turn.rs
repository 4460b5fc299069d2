//! Turn derivation for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// Returns the player to move next.
///
/// X moves whenever an even number of squares is occupied. This trusts that
/// marks were placed in strict alternation, which holds because only the
/// engine can write to a board.
#[instrument(level = "trace", skip(board))]
pub fn compute_next_turn(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
