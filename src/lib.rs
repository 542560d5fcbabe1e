//! Blocktris (workspace facade crate).
//!
//! This package exposes `blocktris::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
