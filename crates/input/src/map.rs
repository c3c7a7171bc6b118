//! Key mapping from terminal events to control actions.

use crate::types::{ControlAction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a control action.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlAction> {
    let action = match key.code {
        // Movement
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char(' ') => GameAction::Rotate,

        // Actions
        KeyCode::Enter => GameAction::HardDrop,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Char('n') | KeyCode::Char('N') => GameAction::Start,

        // Audio toggles
        KeyCode::Char('m') | KeyCode::Char('M') => return Some(ControlAction::ToggleMusic),
        KeyCode::Char('s') | KeyCode::Char('S') => return Some(ControlAction::ToggleSound),

        _ => return None,
    };
    Some(ControlAction::Game(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
