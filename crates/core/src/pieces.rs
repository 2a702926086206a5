//! Pieces module - the static piece catalog and piece instances
//!
//! Each catalog entry is a square pattern in its canonical orientation plus a
//! display color. Orientations are derived on the fly through
//! [`crate::geometry`], so the catalog holds exactly one pattern per piece.

use arrayvec::ArrayVec;

use crate::geometry::sample_model;
use crate::types::{PieceKind, Rgb, Rotation, SPAWN_Y};

/// Largest bounding box side in the catalog
pub const MAX_PIECE_SIZE: usize = 4;

/// Offset of a single occupied cell relative to the piece anchor
pub type CellOffset = (i16, i16);

/// Occupied cells of a piece in one orientation
pub type PieceShape = ArrayVec<CellOffset, { MAX_PIECE_SIZE * MAX_PIECE_SIZE }>;

/// Immutable definition of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    /// Side length of the bounding square
    pub size: usize,
    /// `size * size` cells, row-major; non-zero marks an occupied cell
    pub pattern: &'static [u8],
    pub color: Rgb,
}

impl PieceDef {
    /// Whether local cell `(px, py)` is occupied in the given orientation.
    #[inline]
    pub fn occupied(&self, rotation: Rotation, px: usize, py: usize) -> bool {
        self.pattern[sample_model(self.size, rotation).index(px, py)] != 0
    }

    /// Number of occupied cells (identical for every orientation)
    pub fn cell_count(&self) -> usize {
        self.pattern.iter().filter(|&&v| v != 0).count()
    }

    /// Occupied local cells in the given orientation, row by row.
    pub fn shape(&self, rotation: Rotation) -> PieceShape {
        let model = sample_model(self.size, rotation);
        let mut shape = PieceShape::new();
        for py in 0..self.size {
            for px in 0..self.size {
                if self.pattern[model.index(px, py)] != 0 {
                    shape.push((px as i16, py as i16));
                }
            }
        }
        shape
    }
}

#[rustfmt::skip]
static CATALOG: [PieceDef; 7] = [
    PieceDef {
        size: 4,
        pattern: &[
            0, 0, 0, 0,
            1, 1, 1, 1,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
        color: Rgb::new(255, 255, 255),
    },
    PieceDef {
        size: 3,
        pattern: &[
            0, 1, 0,
            1, 1, 1,
            0, 0, 0,
        ],
        color: Rgb::new(240, 235, 10),
    },
    PieceDef {
        size: 3,
        pattern: &[
            1, 0, 0,
            1, 1, 1,
            0, 0, 0,
        ],
        color: Rgb::new(0, 100, 200),
    },
    PieceDef {
        size: 3,
        pattern: &[
            0, 0, 1,
            1, 1, 1,
            0, 0, 0,
        ],
        color: Rgb::new(20, 180, 230),
    },
    PieceDef {
        size: 3,
        pattern: &[
            1, 1, 0,
            0, 1, 1,
            0, 0, 0,
        ],
        color: Rgb::new(255, 140, 10),
    },
    PieceDef {
        size: 3,
        pattern: &[
            0, 1, 1,
            1, 1, 0,
            0, 0, 0,
        ],
        color: Rgb::new(210, 50, 20),
    },
    PieceDef {
        size: 2,
        pattern: &[
            1, 1,
            1, 1,
        ],
        color: Rgb::new(30, 230, 30),
    },
];

/// Catalog entry for a piece kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.id()]
}

/// The whole catalog, indexed by piece id
pub fn catalog() -> &'static [PieceDef] {
    &CATALOG
}

/// Get the occupied cell offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    piece_def(kind).shape(rotation)
}

/// A piece instance: kind, orientation and the grid position of the
/// top-left corner of its bounding box.
///
/// Instances are plain values. Every move produces a new candidate which the
/// controller validates before swapping it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    /// May be negative while the piece is (partly) above the grid
    pub y: i16,
}

impl Piece {
    /// A freshly spawned piece at column `x`, above the visible grid.
    pub fn spawn(kind: PieceKind, x: i16) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y: SPAWN_Y,
        }
    }

    pub fn def(&self) -> &'static PieceDef {
        piece_def(self.kind)
    }

    pub fn size(&self) -> usize {
        self.def().size
    }

    /// Candidate translated by `(dx, dy)`
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate at row `y`, same column and orientation
    pub fn with_y(&self, y: i16) -> Self {
        Self { y, ..*self }
    }

    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }

    /// Occupied cells in grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let (x, y) = (self.x, self.y);
        get_shape(self.kind, self.rotation)
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}
