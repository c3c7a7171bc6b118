//! Terminal rendering for Atomic Tetris.
//!
//! The terminal is the game's raster surface. Rendering is split in two:
//! - [`GameView`] paints a `GameSnapshot` into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] owns the terminal session and flushes frame diffs
//!
//! Board cells are drawn 2 columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use atomic_tetris_core as core;
pub use atomic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AudioStatusView, GameView, Hitboxes, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
