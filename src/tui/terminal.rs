//! Terminal mode management.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Puts the terminal back in cooked mode on drop.
///
/// Create it as soon as raw mode is on, so that every later `?` in setup
/// or in the game loop still restores the terminal.
pub(crate) struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Guard that undoes raw mode and the alternate screen.
    pub(crate) fn new() -> Self {
        Self::with_restore(restore_terminal)
    }

    fn with_restore(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs every restore step even if an earlier one fails; reports the first error.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}
