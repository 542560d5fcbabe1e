//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values. There is no
//! buffering or auto-repeat logic here: every key press (and terminal key repeat)
//! becomes at most one action, applied by the caller immediately.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, should_quit};
