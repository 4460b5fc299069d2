//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive the turn marker, the winner and the status
//! from a board. The engine calls each of them once per state change.

mod status;
mod turn;
mod win;

pub use status::compute_status;
pub use turn::compute_next_turn;
pub use win::{WINNING_LINES, compute_winner};
