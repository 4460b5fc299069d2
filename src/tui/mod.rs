//! Terminal UI for Cat's Game.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use input::{Action, Direction, map_key, move_cursor};
pub use ui::draw;

use crate::config::ViewConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use self::terminal::TerminalGuard;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip_all, fields(title = %config.title()))]
pub fn run_tui(config: &ViewConfig) -> Result<()> {
    info!("Starting Cat's Game TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.title().as_str());
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = map_key(key.code)
        {
            app.handle(action);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
