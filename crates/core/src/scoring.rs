//! Scoring module - row-clear rewards and the gravity schedule
//!
//! Rewards come from a fixed table indexed by how many rows a single merge
//! cleared. The gravity interval shortens in steps as the score crosses
//! multiples of [`SCORE_THRESHOLD`], down to a floor.

use crate::types::{INTERVAL_DECR_STEP_MS, MIN_INTERVAL_MS, POINTS, SCORE_THRESHOLD};

/// Points for clearing `rows` rows with one merge.
///
/// Zero rows score nothing. More than four rows (only possible on a pile that
/// was prepared by hand) pays the four-row reward.
pub fn line_clear_reward(rows: usize) -> u32 {
    match rows {
        0 => 0,
        n => POINTS[n.min(POINTS.len()) - 1],
    }
}

/// Gravity interval for a given score, starting from `start_ms`.
///
/// `start_ms - INTERVAL_DECR_STEP_MS * (score / SCORE_THRESHOLD)`, clamped to
/// `MIN_INTERVAL_MS`. A start below the floor is returned as is.
pub fn drop_interval_ms(start_ms: u32, score: u32) -> u32 {
    let steps = score / SCORE_THRESHOLD;
    let reduced = start_ms.saturating_sub(INTERVAL_DECR_STEP_MS.saturating_mul(steps));
    reduced.max(MIN_INTERVAL_MS.min(start_ms))
}
