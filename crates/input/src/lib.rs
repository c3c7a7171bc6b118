//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events and mouse presses into [`crate::types::ControlAction`]s. Held keys
//! rely on the terminal's own auto-repeat; there is no DAS/ARR layer.

pub mod map;
pub mod pointer;

pub use atomic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, hit_test};
