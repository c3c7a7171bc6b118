//! Engine module - drives the core simulation in real time.
//!
//! The core crate is a pure state machine; this crate adds the clock:
//!
//! - [`timer`]: a gravity timer that is cancelled and re-armed whenever the
//!   running flag or the level changes
//! - [`controller`]: owns the current state, routes actions and timer ticks
//!   through the core `step` function, and reports what needs redrawing
//!
//! Time is plain monotonic milliseconds supplied by the caller.

pub mod controller;
pub mod timer;

pub use atomic_tetris_core as core;
pub use atomic_tetris_types as types;

pub use controller::{Controller, Outcome};
pub use timer::{GravityTimer, TimerKey};
