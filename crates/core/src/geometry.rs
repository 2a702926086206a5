//! Orientation geometry - rotation as an index remap
//!
//! A piece pattern is stored once, row-major, in its canonical (North) layout.
//! Rotating a piece never copies the pattern: each orientation is a different
//! way of walking the same array. For a local cell `(px, py)` inside the
//! `size x size` bounding box the pattern index is
//!
//! ```text
//! offset + px * dx + py * dy
//! ```
//!
//! where `(offset, dx, dy)` is the [`SampleModel`] of the orientation.

use crate::types::Rotation;

/// How to read a square pattern for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleModel {
    /// Pattern index of local cell `(0, 0)`
    pub offset: isize,
    /// Index step when moving one column right in grid space
    pub dx: isize,
    /// Index step when moving one row down in grid space
    pub dy: isize,
}

impl SampleModel {
    /// Pattern index for the local cell `(px, py)`.
    ///
    /// Both coordinates must be below the size the model was built for.
    #[inline(always)]
    pub fn index(&self, px: usize, py: usize) -> usize {
        (self.offset + px as isize * self.dx + py as isize * self.dy) as usize
    }
}

/// Sample model for a `size x size` pattern in the given orientation.
///
/// # Examples
///
/// ```
/// use tui_blockfall_core::geometry::sample_model;
/// use tui_blockfall_core::types::Rotation;
///
/// let east = sample_model(3, Rotation::East);
/// // The top-left cell of a clockwise-rotated piece is the canonical bottom-left.
/// assert_eq!(east.index(0, 0), 6);
/// assert_eq!(east.index(2, 0), 0);
/// ```
pub fn sample_model(size: usize, rotation: Rotation) -> SampleModel {
    let size = size as isize;
    let right = size - 1;
    let bottom = size * (size - 1);

    let (offset, dx, dy) = match rotation {
        Rotation::North => (0, 1, size),
        Rotation::East => (bottom, -size, 1),
        Rotation::South => (right + bottom, -1, -size),
        Rotation::West => (right, size, -1),
    };

    SampleModel { offset, dx, dy }
}
