//! Score display port.

/// Receives the three score readouts whenever they change.
///
/// The engine calls [`ScoreDisplay::show`] after `init`, after every drop that
/// clears lines, and after every hard drop.
pub trait ScoreDisplay {
    fn show(&mut self, score: u32, level: u32, lines: u32);
}

/// Headless runs.
impl ScoreDisplay for () {
    fn show(&mut self, _score: u32, _level: u32, _lines: u32) {}
}
