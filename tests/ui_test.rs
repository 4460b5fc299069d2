//! Rendering tests against ratatui's in-memory backend.

use cats_game::{Action, App, draw};
use cats_game_engine::Position;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

/// Rows holding the grid: below the 3-line title, above the status box and controls.
const BOARD_ROWS: std::ops::Range<u16> = 3..HEIGHT - 5;

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(app: &App) -> String {
    render_buffer(app)
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Marks and key labels drawn in the grid, with their modifiers.
fn board_glyphs(app: &App) -> Vec<(String, Modifier)> {
    let buffer = render_buffer(app);
    let mut glyphs = Vec::new();
    for y in BOARD_ROWS {
        for x in 0..WIDTH {
            let cell = &buffer[(x, y)];
            let symbol = cell.symbol();
            let is_label = !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit());
            if symbol == "X" || symbol == "O" || is_label {
                glyphs.push((symbol.to_string(), cell.modifier));
            }
        }
    }
    glyphs
}

fn play(app: &mut App, moves: &[usize]) {
    for &pos in moves {
        app.handle(Action::PlayAt(Position::from_index(pos).unwrap()));
    }
}

#[test]
fn test_renders_title_and_status() {
    let app = App::new("Cat's Game");
    let screen = render(&app);

    assert!(screen.contains("Cat's Game"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("[r] restart"));
}

#[test]
fn test_renders_draw_status() {
    let mut app = App::new("Cat's Game");
    play(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let screen = render(&app);
    assert!(screen.contains("Scratch: Cat's game"));
}

#[test]
fn test_occupied_cells_dimmed_while_open_cells_are_not() {
    let mut app = App::new("Cat's Game");
    play(&mut app, &[0, 4]);

    let glyphs = board_glyphs(&app);
    let marks: Vec<_> = glyphs.iter().filter(|(s, _)| s == "X" || s == "O").collect();
    let labels: Vec<_> = glyphs.iter().filter(|(s, _)| s != "X" && s != "O").collect();

    assert_eq!(marks.len(), 2);
    assert!(marks.iter().all(|(_, m)| m.contains(Modifier::DIM)));
    assert_eq!(labels.len(), 7);
    assert!(labels.iter().all(|(_, m)| !m.contains(Modifier::DIM)));
}

#[test]
fn test_every_mark_dimmed_after_win() {
    let mut app = App::new("Cat's Game");
    play(&mut app, &[0, 1, 3, 4, 6]);

    let glyphs = board_glyphs(&app);

    // Empty squares lose their key labels once the game is over.
    assert_eq!(glyphs.len(), 5);
    for (symbol, modifier) in glyphs {
        assert!(modifier.contains(Modifier::DIM), "{symbol} should be dimmed");
    }
}
