//! Application state and logic.

use super::input::{Action, move_cursor};
use cats_game_engine::{Game, MoveOutcome, Position, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Main application state.
///
/// The engine is the only authority on game state. The app keeps a
/// snapshot that the engine refreshes through an observer, and renders
/// from that.
pub struct App {
    game: Game,
    view: Rc<RefCell<Snapshot>>,
    cursor: Position,
    title: String,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(title: impl Into<String>) -> Self {
        let mut game = Game::new();
        let view = Rc::new(RefCell::new(game.snapshot()));
        let sink = Rc::clone(&view);
        game.subscribe(move |snapshot: &Snapshot| {
            *sink.borrow_mut() = *snapshot;
        });

        Self {
            game,
            view,
            cursor: Position::Center,
            title: title.into(),
            message: None,
            should_quit: false,
        }
    }

    /// Latest state published by the engine.
    pub fn snapshot(&self) -> Snapshot {
        *self.view.borrow()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Title shown above the board.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Feedback about the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Select => self.play(self.cursor),
            Action::PlayAt(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.message = None;
    }

    fn play(&mut self, position: Position) {
        self.message = Some(match self.game.play(position) {
            MoveOutcome::Applied { player, position } => {
                format!("{} played {}", player, position.label())
            }
            MoveOutcome::Rejected(reason) => reason.to_string(),
        });
    }
}
