//! Countdown timer for a round.
//!
//! The timer does not measure time itself. A `Clock` calls back once per
//! tick period and the session controller forwards that to `tick()`.

use serde::{Deserialize, Serialize};

/// Remaining and elapsed seconds of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub seconds_left: u32,
    pub seconds_elapsed: u32,
    pub running: bool,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The timer was stopped; nothing changed.
    Ignored,
    /// One second passed and time remains.
    Counted,
    /// One second passed and the countdown hit zero. The timer stopped.
    Expired,
}

/// Countdown bound to one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundTimer {
    state: TimerState,
}

impl RoundTimer {
    /// Create a stopped timer with `starting_seconds` on the clock.
    #[must_use]
    pub fn new(starting_seconds: u32) -> Self {
        Self {
            state: TimerState {
                seconds_left: starting_seconds,
                seconds_elapsed: 0,
                running: false,
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.state.seconds_left
    }

    #[must_use]
    pub fn seconds_elapsed(&self) -> u32 {
        self.state.seconds_elapsed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Start counting down. A timer that already reached zero stays stopped.
    pub fn start(&mut self) {
        self.state.running = self.state.seconds_left > 0;
    }

    pub fn stop(&mut self) {
        self.state.running = false;
    }

    /// Add bonus time.
    pub fn add_seconds(&mut self, seconds: u32) {
        self.state.seconds_left = self.state.seconds_left.saturating_add(seconds);
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.state.running {
            return Tick::Ignored;
        }

        self.state.seconds_left = self.state.seconds_left.saturating_sub(1);
        self.state.seconds_elapsed += 1;

        if self.state.seconds_left == 0 {
            self.state.running = false;
            Tick::Expired
        } else {
            Tick::Counted
        }
    }
}
