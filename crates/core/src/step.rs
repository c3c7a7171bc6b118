//! Pure transition function over [`GameState`].
//!
//! `step` never mutates its input: it returns the successor state together
//! with the events the transition produced. Shells that prefer in-place
//! updates can call the `GameState` methods directly; both paths run the
//! same rules.

use crate::game_state::{Events, GameState};
use crate::types::GameAction;

/// Something that can advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Action(GameAction),
    /// Gravity timer fired
    Tick,
}

impl From<GameAction> for Input {
    fn from(value: GameAction) -> Self {
        Input::Action(value)
    }
}

/// Result of one [`step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Events,
    /// False when the input was rejected and `state` equals the input state
    pub changed: bool,
}

pub fn step(state: &GameState, input: Input) -> Transition {
    let mut next = state.clone();
    let changed = match input {
        Input::Action(action) => next.apply_action(action),
        Input::Tick => next.tick(),
    };
    let events = next.take_events();
    Transition {
        state: next,
        events,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameEvent;
    use crate::types::Phase;

    #[test]
    fn step_leaves_input_untouched() {
        let idle = GameState::new(11);
        let t = step(&idle, GameAction::Start.into());

        assert_eq!(idle.phase(), Phase::Idle);
        assert_eq!(t.state.phase(), Phase::Playing);
        assert!(t.changed);
        assert_eq!(t.events.as_slice(), &[GameEvent::Started]);
        assert!(t.state.events().is_empty());
    }

    #[test]
    fn rejected_input_reports_unchanged() {
        let idle = GameState::new(11);
        let t = step(&idle, Input::Tick);
        assert!(!t.changed);
        assert!(t.events.is_empty());
        assert_eq!(t.state, idle);
    }
}
