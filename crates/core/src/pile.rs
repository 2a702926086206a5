//! Pile module - the settled cells of the playfield
//!
//! The pile is a 16x32 grid stored as one flat, row-major array indexed by
//! `x + BOARD_WIDTH * y`. Row 0 is the top row. A cell is settled iff some
//! merged piece wrote it and it has not been cleared since.
//!
//! The pile only changes in two ways: a merge writes cells, and a row clear
//! translates a block of rows down with a single bulk copy.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells in the pile
pub const PILE_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The settled-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; PILE_SIZE],
}

impl Pile {
    /// Create a new empty pile
    pub fn new() -> Self {
        Self {
            cells: [None; PILE_SIZE],
        }
    }

    /// Calculate flat index from grid coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at `(x, y)`, `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and settled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely settled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        let start = y * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Settle every cell of row `y` with `kind` (test and bench setup helper).
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= BOARD_HEIGHT {
            return;
        }
        let start = y * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH].fill(Some(kind));
    }

    /// Remove row `full` by translating every row above it down by one.
    ///
    /// Rows `0..full` are copied onto rows `1..=full` in one `copy_within`
    /// and row 0 becomes empty. Rows below `full` are untouched.
    pub fn sink_rows_above(&mut self, full: usize) {
        if full >= BOARD_HEIGHT {
            return;
        }
        self.cells.copy_within(0..full * BOARD_WIDTH, BOARD_WIDTH);
        self.cells[..BOARD_WIDTH].fill(None);
    }

    /// Highest (numerically lowest) row holding any settled cell.
    pub fn highest_row(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.is_some())
            .map(|idx| idx / BOARD_WIDTH)
    }

    /// Number of settled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Borrow one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT {
            return None;
        }
        let start = y * BOARD_WIDTH;
        Some(&self.cells[start..start + BOARD_WIDTH])
    }

    /// Write the pile as `0` (empty) / `piece id + 1` (settled) bytes.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH]; BOARD_HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH;
            for (x, v) in row.iter_mut().enumerate() {
                *v = match self.cells[start + x] {
                    Some(kind) => kind.id() as u8 + 1,
                    None => 0,
                };
            }
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Pile {
    fn default() -> Self {
        Self::new()
    }
}
