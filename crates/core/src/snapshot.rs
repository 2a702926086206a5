use crate::pieces::Piece;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer or score display needs for one frame.
///
/// `board` holds `0` for empty cells and `piece id + 1` for settled ones.
/// `active` and `guide` are `None` once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Option<PieceSnapshot>,
    pub guide: Option<PieceSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub rows_cleared: u32,
    pub interval_ms: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH]; BOARD_HEIGHT],
            active: None,
            guide: None,
            next: PieceKind::I,
            score: 0,
            rows_cleared: 0,
            interval_ms: 0,
            game_over: false,
            seed: 0,
        }
    }
}
