//! Property tests for the derivation functions and move handling.

use cats_game_engine::{
    Board, Game, GameStatus, MoveOutcome, Player, Rejection, WINNING_LINES, compute_next_turn,
    compute_winner,
};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Any board, reachable by legal play or not.
fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, 9).prop_map(|cells| {
        let squares: Vec<Value> = cells
            .into_iter()
            .map(|c| match c {
                0 => json!("Empty"),
                1 => json!({ "Occupied": "X" }),
                _ => json!({ "Occupied": "O" }),
            })
            .collect();
        serde_json::from_value(json!({ "squares": squares })).expect("valid board json")
    })
}

/// A shuffled order of all nine squares followed by arbitrary extra requests.
fn move_sequence() -> impl Strategy<Value = Vec<usize>> {
    (
        Just((0usize..9).collect::<Vec<_>>()).prop_shuffle(),
        prop::collection::vec(0usize..12, 0..12),
    )
        .prop_map(|(mut order, extra)| {
            order.extend(extra);
            order
        })
}

proptest! {
    #[test]
    fn winner_iff_uniform_line(board in arbitrary_board()) {
        let uniform: Vec<Player> = WINNING_LINES
            .iter()
            .filter_map(|[a, b, c]| {
                let sq = board.get(*a);
                (sq == board.get(*b) && sq == board.get(*c)).then(|| sq.player()).flatten()
            })
            .collect();

        prop_assert_eq!(compute_winner(&board), uniform.first().copied());
    }

    #[test]
    fn x_moves_iff_even_occupancy(board in arbitrary_board()) {
        let expected = if board.occupied() % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(compute_next_turn(&board), expected);
    }

    #[test]
    fn moves_never_break_invariants(moves in move_sequence()) {
        let mut game = Game::new();
        let mut final_status: Option<GameStatus> = None;

        for m in moves {
            let before = game.snapshot();
            match game.apply_move(m) {
                Err(_) => {
                    prop_assert!(m > 8);
                    prop_assert_eq!(game.snapshot(), before);
                }
                Ok(MoveOutcome::Rejected(Rejection::Occupied(_))) => {
                    prop_assert!(!before.board.squares()[m].is_empty());
                    prop_assert_eq!(game.snapshot(), before);
                }
                Ok(MoveOutcome::Rejected(Rejection::GameOver)) => {
                    prop_assert!(before.status.is_over());
                    prop_assert_eq!(game.snapshot(), before);
                }
                Ok(MoveOutcome::Applied { player, .. }) => {
                    prop_assert_eq!(before.status, GameStatus::InProgress(player));
                    prop_assert_eq!(game.board().occupied(), before.board.occupied() + 1);
                }
            }

            prop_assert_eq!(game.winner(), compute_winner(game.board()));
            if let Some(status) = final_status {
                prop_assert_eq!(game.status(), status);
            } else if game.is_over() {
                final_status = Some(game.status());
            }
        }

        // Nine distinct squares were requested, so the game always ends.
        prop_assert!(game.is_over());
    }
}
