//! The game engine: owns the board and the only two mutating operations.

use crate::error::InvalidPosition;
use crate::observer::{Observer, Observers, SubscriptionId};
use crate::position::Position;
use crate::rules::{compute_next_turn, compute_status, compute_winner};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read-only view of the game handed to observers and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Status line for display.
    pub status: GameStatus,
    /// Winner, once someone has three in a row.
    pub winner: Option<Player>,
}

impl Snapshot {
    /// Checks whether a click on `pos` could change anything.
    ///
    /// Views use this to disable occupied squares and the whole board once
    /// the game has ended.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.status.is_over() && self.board.is_empty(pos)
    }
}

/// Why a well-formed move left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a well-formed move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed.
    Applied {
        /// Player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Values derived from the board, computed together once per change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Derived {
    next_turn: Player,
    winner: Option<Player>,
    status: GameStatus,
}

impl Derived {
    fn from_board(board: &Board) -> Self {
        let next_turn = compute_next_turn(board);
        let winner = compute_winner(board);
        let status = compute_status(winner, board, next_turn);
        Self {
            next_turn,
            winner,
            status,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// The board is the single source of truth; turn marker, winner and status
/// are recomputed from it after every change and can never be set directly.
#[derive(Debug)]
pub struct Game {
    board: Board,
    derived: Derived,
    observers: Observers,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            derived: Derived::from_board(&board),
            board,
            observers: Observers::default(),
        }
    }

    /// Plays the current player's mark at a board index (0-8).
    ///
    /// Moves on an occupied square or after the game is decided leave the
    /// state untouched and come back as [`MoveOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `position` is outside 0-8. The state is
    /// unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize) -> Result<MoveOutcome, InvalidPosition> {
        let pos = Position::try_from(position).inspect_err(|e| debug!(error = %e, "Move rejected"))?;
        Ok(self.play(pos))
    }

    /// Plays the current player's mark at a typed position.
    #[instrument(skip(self), fields(player = %self.derived.next_turn))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if self.derived.status.is_over() {
            debug!(status = %self.derived.status, "Move rejected, game is over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Move rejected, square occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(pos));
        }

        let player = self.derived.next_turn;
        self.board.set(pos, Square::Occupied(player));
        self.derived = Derived::from_board(&self.board);
        info!(%player, %pos, status = %self.derived.status, "Move applied");

        self.publish();
        MoveOutcome::Applied {
            player,
            position: pos,
        }
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.derived = Derived::from_board(&self.board);
        info!("Game restarted");
        self.publish();
    }

    /// Registers an observer for state changes.
    #[instrument(skip_all)]
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer + 'static,
    {
        let id = self.observers.add(Box::new(observer));
        debug!(%id, observers = self.observers.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if the id was unknown.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn next_turn(&self) -> Player {
        self.derived.next_turn
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.derived.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.derived.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.derived.status.is_over()
    }

    /// Returns the empty squares, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns a read-only copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.derived.status,
            winner: self.derived.winner,
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.observers.notify_all(&snapshot);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn play_all(game: &mut Game, moves: &[usize]) {
        for &m in moves {
            assert!(game.apply_move(m).unwrap().is_applied(), "move {m} should apply");
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.next_turn(), Player::X);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_turn_alternates_with_each_applied_move() {
        let mut game = Game::new();
        let mut expected = Player::X;
        for m in [4, 0, 8, 2] {
            assert_eq!(game.next_turn(), expected);
            let outcome = game.apply_move(m).unwrap();
            assert_eq!(
                outcome,
                MoveOutcome::Applied {
                    player: expected,
                    position: Position::from_index(m).unwrap(),
                }
            );
            expected = if expected == Player::X { Player::O } else { Player::X };
        }

        // A rejected move does not hand the turn over.
        let _ = game.apply_move(4).unwrap();
        assert_eq!(game.next_turn(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        play_all(&mut game, &[4]);
        let before = game.snapshot();

        let outcome = game.apply_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Occupied(Position::Center)));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Player::X));

        assert_eq!(
            game.apply_move(8).unwrap(),
            MoveOutcome::Rejected(Rejection::GameOver)
        );
        assert!(game.board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_valid_moves_empty_after_game_over() {
        let mut game = Game::new();
        assert_eq!(game.valid_moves().len(), 9);
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_observer_sees_applied_moves_and_restart_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut game = Game::new();
        game.subscribe(move |s: &Snapshot| sink.borrow_mut().push(s.status));

        play_all(&mut game, &[0]);
        let _ = game.apply_move(0).unwrap();
        let _ = game.apply_move(42);
        game.restart();

        assert_eq!(
            *seen.borrow(),
            vec![
                GameStatus::InProgress(Player::O),
                GameStatus::InProgress(Player::X),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut game = Game::new();
        let id = game.subscribe(move |_: &Snapshot| *sink.borrow_mut() += 1);

        play_all(&mut game, &[0]);
        assert!(game.unsubscribe(id));
        assert!(!game.unsubscribe(id));
        play_all(&mut game, &[1]);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_snapshot_playable_cells() {
        let mut game = Game::new();
        play_all(&mut game, &[0]);
        let snapshot = game.snapshot();
        assert!(!snapshot.is_playable(Position::TopLeft));
        assert!(snapshot.is_playable(Position::Center));

        play_all(&mut game, &[3, 1, 4, 2]);
        let snapshot = game.snapshot();
        assert!(Position::ALL.iter().all(|p| !snapshot.is_playable(*p)));
    }
}
