//! Integration tests for the game controller

use crossterm::event::{KeyCode, KeyEvent};

use tui_blockfall::core::{GameConfig, GameState, Piece, Pile};
use tui_blockfall::input::handle_key_event;
use tui_blockfall::types::{
    ClearedRange, GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH,
};

fn config() -> GameConfig {
    GameConfig::default().with_seed(12345)
}

fn o_piece(x: i16, y: i16) -> Piece {
    Piece {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x,
        y,
    }
}

/// Fill `rows` completely except for the given columns.
fn pile_with_gap(rows: std::ops::Range<usize>, gap: &[i16]) -> Pile {
    let mut pile = Pile::new();
    for y in rows {
        for x in 0..BOARD_WIDTH as i16 {
            if !gap.contains(&x) {
                pile.set(x, y as i16, Some(PieceKind::Z));
            }
        }
    }
    pile
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::with_config(&config());
    assert!(!state.game_over());
    assert!(state.timer_running());
    assert_eq!(state.score(), 0);
    assert_eq!(state.interval_ms(), 800);
    assert_eq!(state.active().y, -2);
    assert_eq!(state.active().rotation, Rotation::North);
    assert_eq!(state.pile().occupied_count(), 0);
}

#[test]
fn test_o_piece_hard_drop_lands_on_floor() {
    let mut state = GameState::with_config(&config());
    assert!(state.set_active(o_piece(7, -2)));
    assert_eq!(state.guide(), o_piece(7, 30));

    let next = state.next();
    assert!(state.apply_action(GameAction::HardDrop));

    for (x, y) in [(7, 30), (8, 30), (7, 31), (8, 31)] {
        assert_eq!(state.pile().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(state.top(), 30);
    assert_eq!(state.score(), 0);
    // The preview piece becomes active.
    assert_eq!(state.active(), next);
}

#[test]
fn test_gravity_lands_piece_like_hard_drop() {
    let mut a = GameState::with_config(&config());
    let mut b = GameState::with_config(&config());
    a.set_active(o_piece(3, -2));
    b.set_active(o_piece(3, -2));

    b.apply_action(GameAction::HardDrop);

    // 32 gravity steps to reach row 30, one more to merge.
    let fired = a.advance(800 * 33);
    assert_eq!(fired, 33);
    assert_eq!(a.pile(), b.pile());
    assert_eq!(a.pieces_locked(), 1);
}

#[test]
fn test_soft_drop_is_one_gravity_step() {
    let mut state = GameState::with_config(&config());
    state.set_active(o_piece(0, 0));
    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active(), o_piece(0, 1));
}

#[test]
fn test_single_row_clear_scores_100() {
    let pile = pile_with_gap(31..32, &[7, 8]);
    let mut state = GameState::with_pile(pile, &config());
    assert_eq!(state.top(), 31);

    assert!(state.set_active(o_piece(7, -2)));
    state.apply_action(GameAction::HardDrop);

    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.rows_cleared, 1);
    assert_eq!(ev.score_delta, 100);
    // Row 30 held the O's upper half, which sank into row 31.
    assert_eq!(
        ev.cleared,
        Some(ClearedRange {
            from_row: 30,
            to_row: 31
        })
    );
    assert!(!ev.game_over);

    assert_eq!(state.score(), 100);
    assert_eq!(state.rows_cleared(), 1);
    // The upper half of the O dropped into the bottom row.
    assert!(state.pile().is_occupied(7, 31));
    assert!(state.pile().is_occupied(8, 31));
    assert_eq!(state.pile().occupied_count(), 2);
    assert_eq!(state.top(), 31);
    assert_eq!(state.interval_ms(), 800);
}

#[test]
fn test_four_rows_at_once_scores_1000() {
    let pile = pile_with_gap(28..32, &[0]);
    let mut state = GameState::with_pile(pile, &config());

    // Vertical I occupies column 2 of its box.
    let i_vertical = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: -2,
        y: 0,
    };
    assert!(state.set_active(i_vertical));
    assert_eq!(state.guide().y, 28);
    state.apply_action(GameAction::HardDrop);

    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.rows_cleared, 4);
    assert_eq!(
        ev.cleared,
        Some(ClearedRange {
            from_row: 28,
            to_row: 31
        })
    );
    assert_eq!(state.score(), 1000);
    assert_eq!(state.rows_cleared(), 4);
    assert_eq!(state.pile().occupied_count(), 0);
    assert_eq!(state.top(), BOARD_HEIGHT);
    // Crossing 1000 points shortens gravity by one step.
    assert_eq!(state.interval_ms(), 750);
}

#[test]
fn test_scoring_restarts_gravity_timer() {
    let pile = pile_with_gap(31..32, &[7, 8]);
    let mut state = GameState::with_pile(pile, &config());
    state.set_active(o_piece(7, 0));

    // 29 steps bring the O to row 29; leave the timer part way to the next.
    assert_eq!(state.advance(800 * 29 + 500), 29);
    assert_eq!(state.active().y, 29);

    // One more step to row 30, then the blocked step merges and clears.
    assert_eq!(state.advance(300 + 800), 2);
    assert_eq!(state.score(), 100);

    // The 500ms carried over earlier were dropped by the restart.
    assert_eq!(state.advance(799), 0);
    assert_eq!(state.advance(1), 1);
}

#[test]
fn test_topping_out_ends_the_game() {
    let pile = pile_with_gap(1..BOARD_HEIGHT, &[0]);
    let mut state = GameState::with_pile(pile, &config());

    assert!(state.set_active(o_piece(4, -2)));
    assert_eq!(state.guide().y, -1);
    state.apply_action(GameAction::HardDrop);

    let ev = state.take_last_event().unwrap();
    assert!(ev.game_over);
    assert_eq!(ev.top_row, Some(0));
    assert!(state.game_over());
    assert!(!state.timer_running());

    let snap = state.snapshot();
    assert!(snap.game_over);
    assert!(snap.active.is_none());

    // No more gravity and no more input.
    let pile_before = state.pile().clone();
    assert_eq!(state.advance(100_000), 0);
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::ShiftLeft));
    assert_eq!(state.pile(), &pile_before);
}

#[test]
fn test_illegal_moves_change_nothing() {
    let mut state = GameState::with_config(&config());
    assert!(state.set_active(o_piece(0, 10)));
    let guide = state.guide();

    assert!(!state.apply_action(GameAction::ShiftLeft));
    assert_eq!(state.active(), o_piece(0, 10));
    assert_eq!(state.guide(), guide);

    assert!(!state.set_active(o_piece(-1, 10)));
    assert_eq!(state.active(), o_piece(0, 10));
}

#[test]
fn test_rotation_is_rejected_against_wall() {
    let mut state = GameState::with_config(&config());
    // Vertical I hugging the left wall; turning it flat would cross it.
    let i_vertical = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: -2,
        y: 5,
    };
    assert!(state.set_active(i_vertical));
    assert!(!state.apply_action(GameAction::RotateRight));
    assert!(!state.apply_action(GameAction::RotateLeft));
    assert_eq!(state.active(), i_vertical);

    assert!(state.apply_action(GameAction::ShiftRight));
    assert!(state.apply_action(GameAction::ShiftRight));
    assert!(state.apply_action(GameAction::RotateRight));
    assert_eq!(state.active().rotation, Rotation::South);
}

#[test]
fn test_keys_drive_the_controller() {
    let mut state = GameState::with_config(&config());
    state.set_active(o_piece(5, 0));

    for code in [KeyCode::Right, KeyCode::Right, KeyCode::Left, KeyCode::Down] {
        let action = handle_key_event(KeyEvent::from(code)).unwrap();
        state.apply_action(action);
    }
    assert_eq!(state.active(), o_piece(6, 1));

    let drop = handle_key_event(KeyEvent::from(KeyCode::Char(' '))).unwrap();
    assert_eq!(drop, GameAction::HardDrop);
    state.apply_action(drop);
    assert!(state.pile().is_occupied(6, 31));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for _ in 0..40 {
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next(), b.next());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
