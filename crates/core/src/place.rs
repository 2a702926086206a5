//! Placement engine - collision, merge, resting position and row clears
//!
//! Every function here is a pure operation over a [`Pile`] and a [`Piece`]
//! value. None of them fail: illegal placements are reported as `false` or
//! `None` and the controller decides what that means.

use arrayvec::ArrayVec;

use crate::geometry::sample_model;
use crate::pieces::Piece;
use crate::pile::Pile;
use crate::types::{ClearedRange, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` can occupy its position without touching a wall,
/// the floor or a settled cell.
///
/// Cells above the grid (`y < 0`) never collide with the pile, but they are
/// still bound by the side walls.
pub fn fits(pile: &Pile, piece: &Piece) -> bool {
    let def = piece.def();
    let model = sample_model(def.size, piece.rotation);

    for py in 0..def.size {
        let yc = piece.y + py as i16;
        for px in 0..def.size {
            if def.pattern[model.index(px, py)] == 0 {
                continue;
            }
            let xc = piece.x + px as i16;
            let outside = xc < 0 || xc >= BOARD_WIDTH as i16 || yc >= BOARD_HEIGHT as i16;
            if outside || pile.is_occupied(xc, yc) {
                return false;
            }
        }
    }

    true
}

/// Write `piece` into the pile.
///
/// Only cells inside the grid are written. Returns the smallest row index
/// written, or `None` when the whole piece was still above the grid.
pub fn merge(pile: &mut Pile, piece: &Piece) -> Option<usize> {
    let mut top_row: Option<usize> = None;

    for (xc, yc) in piece.cells() {
        if yc < 0 || yc >= BOARD_HEIGHT as i16 {
            continue;
        }
        if pile.set(xc, yc, Some(piece.kind)) {
            let row = yc as usize;
            top_row = Some(top_row.map_or(row, |t| t.min(row)));
        }
    }

    top_row
}

/// A merge that wrote into row 0, or wrote nothing at all, ends the game.
pub fn is_topped_out(top_row: Option<usize>) -> bool {
    matches!(top_row, None | Some(0))
}

/// Where `piece` would come to rest if dropped straight down.
///
/// Probes one row at a time and keeps the last offset that fits. A piece
/// that does not fit where it is comes back unchanged.
pub fn resting_position(pile: &Pile, piece: &Piece) -> Piece {
    let mut d: i16 = 0;
    while fits(pile, &piece.with_y(piece.y + d + 1)) {
        d += 1;
    }
    piece.with_y(piece.y + d)
}

/// Outcome of [`scan_and_clear_rows`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Each cleared row, as indexed at the moment it was removed
    pub rows: ArrayVec<usize, BOARD_HEIGHT>,
    /// Rows whose content changed, for incremental redraws
    pub range: Option<ClearedRange>,
}

impl ClearReport {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Scan down from row `top` for full rows and remove them.
///
/// When a full row is found everything above it sinks by one row, then the
/// scan resumes one row lower than before. Any row that was above the cleared
/// one has moved down by exactly one, so nothing is skipped.
///
/// `top` is the highest row known to hold settled cells; rows above it are
/// never inspected.
pub fn scan_and_clear_rows(pile: &mut Pile, top: usize) -> ClearReport {
    let mut report = ClearReport::default();
    let mut scan_from = top;

    while let Some(full) = (scan_from..BOARD_HEIGHT).find(|&y| pile.is_row_full(y)) {
        pile.sink_rows_above(full);
        report.rows.push(full);
        scan_from += 1;
    }

    if let Some(&last) = report.rows.last() {
        report.range = Some(ClearedRange {
            from_row: top.min(report.rows[0]),
            to_row: last,
        });
    }

    report
}
