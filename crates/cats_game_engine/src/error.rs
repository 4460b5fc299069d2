//! Engine error types.

use derive_more::{Display, Error};

/// A move index outside the board.
///
/// This is the only condition the engine reports as an error. Moves on an
/// occupied square or after the game is decided are ordinary rejections, see
/// [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("Invalid position {} (must be 0-8)", position)]
pub struct InvalidPosition {
    position: usize,
}

impl InvalidPosition {
    /// Creates an error for the offending index.
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// The index that was out of range.
    pub fn position(&self) -> usize {
        self.position
    }
}
