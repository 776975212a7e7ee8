//! Scoring module - the fixed per-line-count score table.
//!
//! The delta is a function of how many rows cleared in one resolution pass,
//! not of the per-row positions: 1 -> 10, 2 -> 20, 3 -> 30, 4 -> 50.

use blockfall_types::LINE_SCORES;

/// Score delta for clearing `rows_cleared` rows in a single pass.
/// Zero rows (and anything past the table) scores nothing.
pub fn line_clear_score(rows_cleared: usize) -> u32 {
    LINE_SCORES.get(rows_cleared).copied().unwrap_or(0)
}
