//! Scoring module - line-clear points, levels and gravity speed
//!
//! The rules are linear on purpose:
//! - A clear scores `lines * 100 * level`; four lines are worth exactly four singles.
//! - Every 10 cleared lines raise the level by one, starting from level 1.
//! - Gravity speeds up by 100ms per level and bottoms out at 100ms (level 10).

use std::num::NonZeroU32;

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_ROW,
    LINES_PER_LEVEL, LINE_CLEAR_POINTS,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: NonZeroU32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level.get())
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(total_lines / LINES_PER_LEVEL)
}

/// Gravity interval in milliseconds for `level`
pub fn drop_interval_ms(level: NonZeroU32) -> u32 {
    let speedup = (level.get() - 1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Bonus for a hard drop travelling `rows` rows
pub fn hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}
