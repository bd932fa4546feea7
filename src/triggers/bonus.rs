//! Streak bonus.
//!
//! Watches the streak counter after each match. The first time the streak
//! reaches the threshold in a round, it adds time to the countdown. It fires
//! at most once per round.

use tracing::info;

use crate::events::RoundEvent;
use crate::rules::RoundState;
use crate::timer::RoundTimer;

/// One-time time bonus for a run of consecutive matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusTrigger {
    /// Seconds added when the bonus fires.
    pub seconds: u32,
    /// Streak length that fires the bonus.
    pub streak: u32,
}

impl Default for BonusTrigger {
    fn default() -> Self {
        Self { seconds: 3, streak: 2 }
    }
}

impl BonusTrigger {
    #[must_use]
    pub const fn new(seconds: u32, streak: u32) -> Self {
        Self { seconds, streak }
    }

    /// Would the bonus fire for this state?
    #[must_use]
    pub fn is_due(&self, round: &RoundState) -> bool {
        !round.power_used && round.streak == self.streak
    }

    /// Fire the bonus if it is due.
    pub fn observe(&self, round: &mut RoundState, timer: &mut RoundTimer) -> Option<RoundEvent> {
        if !self.is_due(round) {
            return None;
        }

        round.power_used = true;
        timer.add_seconds(self.seconds);
        info!(seconds = self.seconds, streak = round.streak, "streak bonus granted");

        Some(RoundEvent::BonusGranted { seconds: self.seconds })
    }
}
