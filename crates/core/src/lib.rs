//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: randomness comes from an injected [`PieceSource`]
//! - **Testable**: the engine runs headless; the score display is a trait
//! - **Portable**: the terminal front-end is just one consumer of [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection, merging and line clearing
//! - [`pieces`]: shape matrices, clockwise rotation, the active piece
//! - [`rng`]: uniform and scripted piece sources
//! - [`scoring`]: line-clear points, level and gravity curves
//! - [`engine`]: the game state machine tying it all together
//! - [`display`]: the score display port
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn is an independent draw; repeats are allowed
//! - **Naive rotation**: clockwise only, reverted on collision, no wall kicks
//! - **No lock delay**: a piece lands on the first gravity step that cannot move it
//! - **Scoring**: `lines * 100 * level`, plus 2 points per row of hard drop
//! - **Levels**: one per 10 lines; gravity 1000ms at level 1, 100ms faster per level,
//!   never below 100ms
//!
//! # Example
//!
//! ```
//! use blocktris_core::{GameEngine, Phase, ScriptedPieces};
//! use blocktris_types::{GameAction, PieceKind};
//!
//! let mut game = GameEngine::new(ScriptedPieces::repeat(PieceKind::O), ());
//! game.init(0);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 36); // 18 rows of hard drop
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`] once per frame with a monotonic timestamp in milliseconds.
//! The engine does the interval arithmetic and performs at most one gravity step per tick.

pub mod board;
pub mod display;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use display::ScoreDisplay;
pub use engine::{GameEngine, Phase};
pub use pieces::{ActivePiece, Shape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use snapshot::GameSnapshot;
