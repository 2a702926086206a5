//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core simulation, the terminal renderer and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 32 rows (indexed 0-31, row 0 is the top)
//! - **Spawn row**: -2, i.e. new pieces start above the visible grid
//!
//! # Gravity Interval
//!
//! The gravity timer starts at `START_INTERVAL_MS` and is shortened by
//! `INTERVAL_DECR_STEP_MS` for every `SCORE_THRESHOLD` points, never going
//! below `MIN_INTERVAL_MS`:
//!
//! | Constant | Value |
//! |----------|-------|
//! | `START_INTERVAL_MS` | 800 |
//! | `INTERVAL_DECR_STEP_MS` | 50 |
//! | `SCORE_THRESHOLD` | 1000 |
//! | `MIN_INTERVAL_MS` | 100 |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::O.id(), 6);
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::O));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//!
//! assert_eq!(BOARD_WIDTH, 16);
//! assert_eq!(BOARD_HEIGHT, 32);
//! ```

/// Grid width in cells (16 columns)
pub const BOARD_WIDTH: usize = 16;

/// Grid height in cells (32 rows)
pub const BOARD_HEIGHT: usize = 32;

/// Row at which freshly spawned pieces are anchored
pub const SPAWN_Y: i16 = -2;

/// Frame budget of the terminal frontend in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Initial gravity interval (one row per 800ms)
pub const START_INTERVAL_MS: u32 = 800;

/// Interval reduction applied per reached score threshold
pub const INTERVAL_DECR_STEP_MS: u32 = 50;

/// Score needed for each interval reduction step
pub const SCORE_THRESHOLD: u32 = 1000;

/// Fastest gravity interval the schedule may reach
pub const MIN_INTERVAL_MS: u32 = 100;

/// Rewards for clearing 1, 2, 3 or 4 rows with a single merge.
///
/// Indexed by `rows_cleared - 1`. Four rows at once pays more than four
/// single clears.
pub const POINTS: [u32; 4] = [100, 250, 500, 1000];

/// The seven piece kinds, in catalog order
///
/// - **I**: 4x4 box, horizontal bar
/// - **T**: 3x3 box
/// - **J**: 3x3 box
/// - **L**: 3x3 box (mirror of J)
/// - **Z**: 3x3 box
/// - **S**: 3x3 box (mirror of Z)
/// - **O**: 2x2 box, square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    J,
    L,
    Z,
    S,
    O,
}

impl PieceKind {
    /// Every kind in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
    ];

    /// Catalog index of this kind
    pub fn id(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(6), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(7), None);
    /// ```
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }
}

/// The four orientations of a piece
///
/// - **North**: canonical orientation (0°)
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Commands the input layer can issue to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Move piece one cell left
    ShiftLeft,
    /// Move piece one cell right
    ShiftRight,
    /// Move piece one cell down, merging it if it cannot move
    SoftDrop,
    /// Drop piece to its resting position and merge it
    HardDrop,
}

/// A cell of the pile
///
/// - `None`: empty
/// - `Some(PieceKind)`: settled, remembering which piece left it there
pub type Cell = Option<PieceKind>;

/// Rows a renderer has to repaint after a clear.
///
/// Both bounds are inclusive grid rows. Everything between them moved or
/// vanished; rows outside the range are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedRange {
    pub from_row: usize,
    pub to_row: usize,
}

/// Event emitted after the active piece merges into the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Highest (numerically lowest) row the piece wrote into, if any.
    pub top_row: Option<usize>,
    pub rows_cleared: u32,
    pub score_delta: u32,
    pub cleared: Option<ClearedRange>,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_follow_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.id(), i);
            assert_eq!(PieceKind::from_id(i), Some(*kind));
        }
    }

    #[test]
    fn four_quarter_turns_return_to_start() {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(r.rotate_cw().rotate_ccw(), r);
            assert_eq!(r.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), r);
        }
    }

    #[test]
    fn reward_table_is_non_linear() {
        assert_eq!(POINTS, [100, 250, 500, 1000]);
        assert!(POINTS[3] > 4 * POINTS[0]);
    }
}
