//! Atomic Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benches share one import path:
//! `atomic_tetris::{audio,core,engine,input,term,types}`.

pub mod config;
pub mod logging;

pub use atomic_tetris_audio as audio;
pub use atomic_tetris_core as core;
pub use atomic_tetris_engine as engine;
pub use atomic_tetris_input as input;
pub use atomic_tetris_term as term;
pub use atomic_tetris_types as types;

pub use config::Config;
