//! Headless play: apply a list of moves and report the result.

use cats_game_engine::{Game, InvalidPosition, MoveOutcome};
use tracing::{info, instrument, warn};

/// Plays `positions` in order on a fresh game.
///
/// Returns the final board followed by the status line. Rejected moves are
/// noted in the report but do not stop the script.
///
/// # Errors
///
/// Returns [`InvalidPosition`] on the first index outside 0-8.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn run_script(positions: &[usize]) -> Result<String, InvalidPosition> {
    let mut game = Game::new();
    let mut report = String::new();

    for (turn, &position) in positions.iter().enumerate() {
        if let MoveOutcome::Rejected(reason) = game.apply_move(position)? {
            warn!(turn = turn + 1, position, %reason, "Scripted move ignored");
            report.push_str(&format!("Move {} ignored: {}\n", turn + 1, reason));
        }
    }

    info!(status = %game.status(), "Script finished");
    report.push_str(&game.board().display());
    report.push_str("\n\n");
    report.push_str(&game.status().to_string());
    Ok(report)
}
