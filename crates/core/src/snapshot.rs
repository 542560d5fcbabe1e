//! Snapshot module - a `Copy` view of one frame of game state
//!
//! Renderers never borrow the engine while drawing. They take a [`GameSnapshot`] (settled
//! cells as piece codes, the active piece, phase and counters) and draw from that.
//!
//! ```
//! use blocktris_core::{GameEngine, GameSnapshot, Phase, ScriptedPieces};
//! use blocktris_types::PieceKind;
//!
//! let mut game = GameEngine::new(ScriptedPieces::repeat(PieceKind::I), ());
//! let mut snap = GameSnapshot::default();
//! game.snapshot_into(&mut snap);
//! assert_eq!(snap.phase, Phase::Idle);
//!
//! game.init(0);
//! game.hard_drop();
//! game.snapshot_into(&mut snap);
//! assert_eq!(snap.board[19][3..7], [PieceKind::I.code(); 4]);
//! assert_eq!(snap.score, 38);
//! assert!(snap.playable());
//! ```

use crate::engine::Phase;
use crate::pieces::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells as piece codes, `0` = empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActivePiece>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Whether input would currently reach the active piece.
    pub fn playable(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused) && self.active.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}
