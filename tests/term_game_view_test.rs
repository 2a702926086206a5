use tui_blockfall::core::{GameConfig, GameSnapshot, GameState, Piece};
use tui_blockfall::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn count_char(fb: &FrameBuffer, ch: char) -> usize {
    (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).map(|g| g.ch) == Some(ch))
        .count()
}

fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn active_and_guide_are_drawn() {
    let mut game = GameState::with_config(&GameConfig::default());
    let piece = Piece {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x: 4,
        y: 5,
    };
    assert!(game.set_active(piece));

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(80, 40));

    // Four cells, two columns each, plus the NEXT preview.
    let blocks = count_char(&fb, '█');
    assert_eq!(blocks, 4 * 2 + 4 * 2);
    assert_eq!(count_char(&fb, '░'), 4 * 2);
}

#[test]
fn guide_is_hidden_under_active_piece() {
    let mut game = GameState::with_config(&GameConfig::default());
    let resting = Piece {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x: 4,
        y: 30,
    };
    assert!(game.set_active(resting));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 40));
    assert_eq!(count_char(&fb, '░'), 0);
}

#[test]
fn empty_board_shows_grid_dots() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(80, 40));
    assert_eq!(count_char(&fb, '·'), BOARD_WIDTH * BOARD_HEIGHT * 2);
}

#[test]
fn score_updates_after_render() {
    let snap = GameSnapshot {
        score: 1250,
        rows_cleared: 7,
        interval_ms: 750,
        ..GameSnapshot::default()
    };
    let fb = GameView::default().render(&snap, Viewport::new(80, 40));
    assert!(contains_text(&fb, "1250"));
    assert!(contains_text(&fb, "750ms"));
}

#[test]
fn diff_after_one_move_is_smaller_than_full_redraw() {
    let mut game = GameState::with_config(&GameConfig::default());
    game.set_active(Piece {
        kind: PieceKind::T,
        rotation: Rotation::North,
        x: 6,
        y: 10,
    });

    let view = GameView::default();
    let viewport = Viewport::new(80, 40);
    let before = view.render(&game.snapshot(), viewport);
    game.tick();
    let after = view.render(&game.snapshot(), viewport);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}
