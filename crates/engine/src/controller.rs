//! Controller - the imperative shell around the pure game core.
//!
//! Holds the current [`GameState`], feeds inputs through [`step`], swaps in the
//! successor state, and keeps the gravity timer keyed to the latest flags.
//! Callers redraw whenever an [`Outcome`] says so.

use atomic_tetris_core::{step, Events, GameEvent, GameSnapshot, GameState, Input};
use atomic_tetris_types::GameAction;

use crate::timer::{GravityTimer, TimerKey};

/// What a dispatch or timer poll produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub events: Events,
    pub redraw: bool,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
    timer: GravityTimer,
}

impl Controller {
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed))
    }

    /// Wrap an existing state (e.g. a scripted scenario). The timer arms on
    /// the first dispatch or [`Controller::resume_clock`].
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            timer: GravityTimer::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    /// Re-key the gravity timer to the current state.
    ///
    /// Cancels the deadline when the game is not running and re-arms it one
    /// interval out when the running flag or the level changed. An unchanged
    /// key leaves the pending deadline alone.
    pub fn resume_clock(&mut self, now_ms: u64) {
        self.timer.sync(TimerKey::of(&self.state), now_ms);
    }

    /// Apply a player action at `now_ms`.
    pub fn dispatch(&mut self, action: GameAction, now_ms: u64) -> Outcome {
        self.advance(Input::Action(action), now_ms)
    }

    /// Run a gravity step if the timer is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Outcome {
        self.resume_clock(now_ms);
        if !self.timer.poll(now_ms) {
            return Outcome::none();
        }
        self.advance(Input::Tick, now_ms)
    }

    /// When the gravity timer fires next, if it is armed
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timer.deadline_ms()
    }

    fn advance(&mut self, input: Input, now_ms: u64) -> Outcome {
        let transition = step(&self.state, input);
        if !transition.changed {
            return Outcome::none();
        }

        self.state = transition.state;
        self.timer.sync(TimerKey::of(&self.state), now_ms);

        for event in &transition.events {
            log_event(event, &self.state);
        }

        Outcome {
            events: transition.events,
            redraw: true,
        }
    }
}

fn log_event(event: &GameEvent, state: &GameState) {
    match event {
        GameEvent::Started => log::info!("game started (seed {})", state.seed()),
        GameEvent::LinesCleared { lines, points } => {
            log::debug!("cleared {} line(s) for {} points", lines, points)
        }
        GameEvent::LevelUp { level } => log::info!("level up: {}", level),
        GameEvent::Paused => log::debug!("paused"),
        GameEvent::Resumed => log::debug!("resumed"),
        GameEvent::GameOver { score } => {
            log::info!("game over: score {} lines {}", score, state.lines())
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomic_tetris_core::{Board, Piece};
    use atomic_tetris_types::{NeonColor, Phase, PieceKind};

    #[test]
    fn idle_controller_never_ticks() {
        let mut c = Controller::new(3);
        let out = c.poll(60_000);
        assert!(!out.redraw);
        assert!(c.next_deadline_ms().is_none());
    }

    #[test]
    fn start_arms_gravity_one_interval_out() {
        let mut c = Controller::new(3);
        let out = c.dispatch(GameAction::Start, 1_000);
        assert!(out.redraw);
        assert_eq!(out.events.as_slice(), &[GameEvent::Started]);
        assert_eq!(c.next_deadline_ms(), Some(2_000));

        let y0 = c.state().active().unwrap().y;
        assert!(!c.poll(1_999).redraw);
        assert!(c.poll(2_000).redraw);
        assert_eq!(c.state().active().unwrap().y, y0 + 1);
    }

    #[test]
    fn pause_stops_ticks_and_resume_restarts_interval() {
        let mut c = Controller::new(3);
        c.dispatch(GameAction::Start, 0);
        c.dispatch(GameAction::Pause, 500);
        assert_eq!(c.state().phase(), Phase::Paused);
        assert!(c.next_deadline_ms().is_none());
        assert!(!c.poll(5_000).redraw);

        c.dispatch(GameAction::Pause, 5_000);
        assert_eq!(c.next_deadline_ms(), Some(6_000));
    }

    #[test]
    fn resume_clock_rekeys_only_on_change() {
        let mut c = Controller::new(3);
        c.resume_clock(0);
        assert!(c.next_deadline_ms().is_none());

        c.dispatch(GameAction::Start, 100);
        c.resume_clock(800);
        assert_eq!(c.next_deadline_ms(), Some(1_100));

        c.dispatch(GameAction::Pause, 900);
        c.resume_clock(950);
        assert!(c.next_deadline_ms().is_none());
    }

    #[test]
    fn rejected_action_keeps_timer() {
        let mut c = Controller::new(3);
        c.dispatch(GameAction::Start, 0);
        // Shift against the wall until it is rejected.
        let mut t = 10;
        while c.dispatch(GameAction::MoveLeft, t).redraw {
            t += 10;
        }
        assert_eq!(c.next_deadline_ms(), Some(1_000));
    }

    #[test]
    fn game_over_stops_the_loop() {
        let mut board = Board::new();
        for x in 3..7 {
            board.set(x, 0, Some(NeonColor::Violet));
            board.set(x, 1, Some(NeonColor::Violet));
        }
        let piece = Piece {
            x: 0,
            y: 18,
            ..Piece::spawn(PieceKind::O)
        };
        let state = GameState::in_progress(9, board, piece, PieceKind::I).unwrap();
        let mut c = Controller::from_state(state);
        c.resume_clock(0);
        assert_eq!(c.next_deadline_ms(), Some(1_000));

        let out = c.poll(1_000);
        assert!(out.events.contains(&GameEvent::GameOver { score: 0 }));
        assert_eq!(c.state().phase(), Phase::GameOver);
        assert!(c.next_deadline_ms().is_none());
        assert!(!c.poll(10_000).redraw);
    }

    #[test]
    fn level_up_rearms_at_new_speed() {
        // Pre-filled complete rows are swept by the next lock along with the
        // rows the bar completes, for twelve lines in one go.
        let mut rows = vec!["##########"; 8];
        rows.extend(std::iter::repeat("..........").take(8));
        rows.extend(std::iter::repeat("#########.").take(4));
        let board = Board::from_ascii(&rows);
        let bar = Piece {
            shape: atomic_tetris_core::Shape::of(PieceKind::I).rotated_cw(),
            x: 9,
            y: 8,
            kind: PieceKind::I,
        };
        let state = GameState::in_progress(2, board, bar, PieceKind::O).unwrap();
        let mut c = Controller::from_state(state);
        c.resume_clock(0);
        assert_eq!(c.timer().interval_ms(), 1_000);

        let out = c.dispatch(GameAction::HardDrop, 500);
        assert!(out.events.contains(&GameEvent::LinesCleared {
            lines: 12,
            points: 1_200
        }));
        assert!(out.events.contains(&GameEvent::LevelUp { level: 2 }));
        assert_eq!(c.timer().interval_ms(), 900);
        assert_eq!(c.next_deadline_ms(), Some(1_400));
    }
}
