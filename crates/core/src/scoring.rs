//! Scoring module - classic line-clear table
//!
//! One award per clear call, looked up by the number of rows removed. Anything
//! past four rows scores like four.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in a single call.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
