//! Gravity timer - a repeating deadline that is cancelled and re-armed
//! whenever the session flags or the level change.
//!
//! Time is passed in as monotonic milliseconds so the timer stays pure and
//! can be driven by tests without sleeping.

use atomic_tetris_core::{get_drop_interval_ms, GameState};

/// The state the timer was armed for.
///
/// Any difference between the stored key and the current one restarts the
/// timer from scratch, exactly like clearing and re-creating an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerKey {
    pub running: bool,
    pub level: u32,
}

impl TimerKey {
    pub fn of(state: &GameState) -> Self {
        Self {
            running: state.is_running(),
            level: state.level(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GravityTimer {
    key: Option<TimerKey>,
    interval_ms: u32,
    deadline_ms: Option<u64>,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arm if `key` differs from the key the timer is running under.
    ///
    /// Returns true when the timer was restarted or cancelled.
    pub fn sync(&mut self, key: TimerKey, now_ms: u64) -> bool {
        if self.key == Some(key) {
            return false;
        }

        self.key = Some(key);
        self.deadline_ms = None;
        if key.running {
            self.interval_ms = get_drop_interval_ms(key.level);
            self.deadline_ms = Some(now_ms + self.interval_ms as u64);
        }
        true
    }

    /// Whether the timer fires at `now_ms`.
    ///
    /// Fires at most once per call. The next deadline follows the previous one
    /// by one interval, but never lands at or before `now_ms`, so a stalled
    /// caller does not get a burst of catch-up ticks.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }

        let interval = self.interval_ms as u64;
        let mut next = deadline + interval;
        if next <= now_ms {
            next = now_ms + interval;
        }
        self.deadline_ms = Some(next);
        true
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
