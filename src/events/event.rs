//! Round events.
//!
//! Every state change in a round is reported as a `RoundEvent`. The resolver,
//! timer, and bonus trigger return them; the session controller forwards them
//! to the renderer in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardRef;

/// Something that happened during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new board was dealt.
    Dealt {
        /// Cards on the board.
        card_count: usize,
        /// Grid column hint.
        columns: usize,
    },

    /// A card was turned face up.
    Revealed(CardRef),

    /// Two revealed cards share an identity and stay face up.
    PairMatched(CardRef, CardRef),

    /// Two revealed cards differ; they flip back after the mismatch delay.
    PairMismatched(CardRef, CardRef),

    /// A mismatched pair was turned face down and the board unlocked.
    Concealed(CardRef, CardRef),

    /// The streak bonus added time to the clock.
    BonusGranted {
        /// Seconds added.
        seconds: u32,
    },

    /// Counters or remaining time changed.
    StatusChanged,

    /// All pairs were found.
    Won,

    /// The countdown reached zero before all pairs were found.
    TimeExpired,

    /// Every card stopped accepting clicks.
    BoardDisabled,
}

impl RoundEvent {
    /// Does this event end the round?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundEvent::Won | RoundEvent::TimeExpired)
    }
}

/// Events produced by a single handler call. Rarely more than four.
pub type Events = SmallVec<[RoundEvent; 4]>;

/// One-off messages a renderer shows as an alert or toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The player found every pair.
    Won,
    /// The countdown ran out.
    TimeUp,
    /// The streak bonus fired.
    BonusGranted(u32),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Won => f.write_str("You Win!"),
            Notice::TimeUp => f.write_str("Time's up! Game Over."),
            Notice::BonusGranted(seconds) => write!(f, "Power-Up Activated! +{} seconds", seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(RoundEvent::Won.is_terminal());
        assert!(RoundEvent::TimeExpired.is_terminal());
        assert!(!RoundEvent::StatusChanged.is_terminal());
        assert!(!RoundEvent::PairMatched(CardRef(0), CardRef(1)).is_terminal());
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::Won.to_string(), "You Win!");
        assert_eq!(Notice::TimeUp.to_string(), "Time's up! Game Over.");
        assert_eq!(Notice::BonusGranted(3).to_string(), "Power-Up Activated! +3 seconds");
    }

    #[test]
    fn test_event_serialization() {
        let event = RoundEvent::PairMismatched(CardRef(2), CardRef(5));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RoundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
