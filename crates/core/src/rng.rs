//! RNG module - deterministic randomness for piece spawning
//!
//! Spawning picks a piece uniformly from the catalog and a column uniformly
//! from the positions where its bounding box fits. A small seeded LCG keeps
//! whole games reproducible, which the tests and benches rely on.

use crate::pieces::{piece_def, Piece};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state; the low bits of an LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Produces freshly spawned pieces
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: SimpleRng,
    seed: u32,
}

impl PieceSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Pick a random kind and a random column where its box fits
    /// (`0 <= x <= BOARD_WIDTH - size`), anchored above the grid.
    pub fn spawn(&mut self) -> Piece {
        let id = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let kind = PieceKind::ALL[id];
        let size = piece_def(kind).size;
        let x = self.rng.next_range((BOARD_WIDTH - size + 1) as u32) as i16;
        Piece::spawn(kind, x)
    }

    /// Seed this spawner was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
