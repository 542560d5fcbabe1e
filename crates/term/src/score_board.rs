//! Score readouts shown in the side panel.

use crate::core::ScoreDisplay;

/// Last values pushed by the engine.
///
/// The panel only changes when the engine decides to refresh it, never by polling
/// the engine's live counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}

impl ScoreDisplay for ScoreBoard {
    fn show(&mut self, score: u32, level: u32, lines: u32) {
        self.score = score;
        self.level = level;
        self.lines = lines;
    }
}
