//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame clock interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor (reached at level 10) |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line, times level |
//! | `HARD_DROP_POINTS_PER_ROW` | 2 | Points per row travelled on hard drop |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.color(), 0xa000f0);
//! assert_eq!(PieceKind::from_code(PieceKind::L.code()), Some(PieceKind::L));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame clock interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level gained
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line at level 1 (multiplied by the current level)
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points awarded per row travelled by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fixed display color as `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            PieceKind::I => 0x00f0f0,
            PieceKind::O => 0xf0f000,
            PieceKind::T => 0xa000f0,
            PieceKind::S => 0x00f000,
            PieceKind::Z => 0xf00000,
            PieceKind::J => 0x0000f0,
            PieceKind::L => 0xf0a000,
        }
    }

    /// Non-zero cell code used by snapshots (`0` means empty).
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_code(0), None);
    /// assert_eq!(PieceKind::from_code(8), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Game actions delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, landing it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Instantly drop piece to lowest valid position
    HardDrop,
    /// Toggle pause state
    TogglePause,
    /// Start a new game (from idle, game over, or mid-game)
    Restart,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Settled cell, colored by the piece that filled it
pub type Cell = Option<PieceKind>;

/// Event emitted after the active piece lands.
///
/// Consumed by observers through `GameEngine::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// The piece spawned after this landing did not fit.
    pub topped_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_codes_are_distinct_and_nonzero() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let code = kind.code() as usize;
            assert_ne!(code, 0);
            assert!(!seen[code], "duplicate code for {:?}", kind);
            seen[code] = true;
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn colors_match_classic_palette() {
        assert_eq!(PieceKind::I.color(), 0x00f0f0);
        assert_eq!(PieceKind::O.color(), 0xf0f000);
        assert_eq!(PieceKind::S.color(), 0x00f000);
        assert_eq!(PieceKind::Z.color(), 0xf00000);
        assert_eq!(PieceKind::J.color(), 0x0000f0);
        assert_eq!(PieceKind::L.color(), 0xf0a000);
    }
}
