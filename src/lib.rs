//! Pocket Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `pocket_tetris::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use pocket_tetris_core as core;
pub use pocket_tetris_engine as engine;
pub use pocket_tetris_input as input;
pub use pocket_tetris_term as term;
pub use pocket_tetris_types as types;
