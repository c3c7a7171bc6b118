//! Scoring module - linear line-clear scoring and level progression
//!
//! - A lock that clears `n` lines at level `l` is worth `n * 100 * l`.
//! - The level is `lines / 10 + 1`, so it only ever grows during a game.
//! - Gravity runs every `max(100, 1000 - (level - 1) * 100)` milliseconds.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS,
    START_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared by one lock
/// level: level in effect when the piece locked (1-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level for a cumulative line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level, floored at 100ms
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
