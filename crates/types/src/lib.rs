//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, audio).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn column**: centered, `BOARD_WIDTH / 2 - shape_cols / 2`
//!
//! # Timing
//!
//! Gravity is a fixed-interval timer whose period shrinks with the level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use atomic_tetris_types::{ControlAction, ControlButton, GameAction, NeonColor, PieceKind};
//!
//! assert_eq!(PieceKind::T.color(), NeonColor::Violet);
//! assert_eq!(
//!     ControlButton::HardDrop.action(),
//!     ControlAction::Game(GameAction::HardDrop)
//! );
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Absolute minimum gravity interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the current level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level of a fresh game
pub const START_LEVEL: u32 = 1;

/// Largest shape matrix dimension (the I piece is 1x4)
pub const MAX_SHAPE_DIM: usize = 4;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in a fixed order used by the randomizer.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color tag painted into the board when this piece locks.
    ///
    /// The palette only has three neon colors, so several kinds share one.
    pub fn color(&self) -> NeonColor {
        match self {
            PieceKind::I | PieceKind::J => NeonColor::Cyan,
            PieceKind::O | PieceKind::S | PieceKind::L => NeonColor::Mint,
            PieceKind::T | PieceKind::Z => NeonColor::Violet,
        }
    }
}

/// Color tag stored in occupied board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeonColor {
    /// `#03E1FF`
    Cyan,
    /// `#00FFA3`
    Mint,
    /// `#DC1FFF`
    Violet,
}

impl NeonColor {
    /// 24-bit RGB components.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NeonColor::Cyan => (0x03, 0xE1, 0xFF),
            NeonColor::Mint => (0x00, 0xFF, 0xA3),
            NeonColor::Violet => (0xDC, 0x1F, 0xFF),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(NeonColor)`: Cell filled by a locked piece of that color
pub type Cell = Option<NeonColor>;

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new game (from idle, game over, or mid-game)
    Start,
}

/// Everything a key press or button click can request.
///
/// Game actions go to the controller; the audio toggles stay in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Game(GameAction),
    ToggleSound,
    ToggleMusic,
}

/// On-screen buttons (the pointer/touch equivalents of the key bindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlButton {
    Start,
    Pause,
    Music,
    Sound,
    Left,
    Rotate,
    Right,
    Down,
    HardDrop,
}

impl ControlButton {
    pub const ALL: [ControlButton; 9] = [
        ControlButton::Start,
        ControlButton::Pause,
        ControlButton::Music,
        ControlButton::Sound,
        ControlButton::Left,
        ControlButton::Rotate,
        ControlButton::Right,
        ControlButton::Down,
        ControlButton::HardDrop,
    ];

    pub fn action(&self) -> ControlAction {
        match self {
            ControlButton::Start => ControlAction::Game(GameAction::Start),
            ControlButton::Pause => ControlAction::Game(GameAction::Pause),
            ControlButton::Music => ControlAction::ToggleMusic,
            ControlButton::Sound => ControlAction::ToggleSound,
            ControlButton::Left => ControlAction::Game(GameAction::MoveLeft),
            ControlButton::Rotate => ControlAction::Game(GameAction::Rotate),
            ControlButton::Right => ControlAction::Game(GameAction::MoveRight),
            ControlButton::Down => ControlAction::Game(GameAction::SoftDrop),
            ControlButton::HardDrop => ControlAction::Game(GameAction::HardDrop),
        }
    }
}

/// Terminal-space rectangle (columns/rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }
}

/// A clickable button placed on screen by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub rect: Rect,
    pub button: ControlButton,
}

/// Sound cue types fired by the audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Move,
    Rotate,
    Drop,
    Clear,
    GameOver,
}

/// Coarse session phase derived from the playing/paused/game-over flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game started yet
    Idle,
    Playing,
    Paused,
    GameOver,
}
