//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state with **zero dependencies** on
//! terminal, audio, or clock I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable through [`GameState`] or [`step`]
//! - **Allocation-free**: fixed-size board, shapes, and event buffers
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks, merging, and line clearing
//! - [`shape`]: tetromino matrices and the clockwise rotation transform
//! - [`game_state`]: active/next piece, score, level, lines, session flags
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line score, level curve, gravity interval
//! - [`snapshot`]: render-facing copy of the state
//! - [`step`]: pure `(state, input) -> (state, events)` transition
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row; the next piece is always previewed
//! - Rotation is a plain 90° clockwise matrix turn, rejected on collision
//! - A piece locks when a downward move is blocked; there is no lock delay
//! - Clearing `n` lines at level `l` scores `n * 100 * l`
//! - The level is `lines / 10 + 1`
//! - A spawn collision ends the game
//!
//! # Example
//!
//! ```
//! use atomic_tetris_core::{step, GameState, Input};
//! use atomic_tetris_types::{GameAction, Phase};
//!
//! let game = GameState::new(12345);
//! let t = step(&game, Input::Action(GameAction::Start));
//! assert_eq!(t.state.phase(), Phase::Playing);
//!
//! let t = step(&t.state, Input::Action(GameAction::HardDrop));
//! assert_eq!(t.state.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod step;

pub use atomic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{Events, GameEvent, GameState, Piece};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use step::{step, Input, Transition};
