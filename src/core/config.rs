//! Round configuration.
//!
//! Two layers:
//! - `Difficulty`: the fixed tier table (pair count, starting seconds, grid columns)
//! - `RoundConfig`: engine tunables shared by every round (delays, bonus, seed)
//!
//! Tiers are not user-tunable beyond picking one; `RoundConfig` exists so tests
//! and hosts can pin the seed or shrink the identity space.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct card identities in the default art catalogue.
pub const DEFAULT_IDENTITY_SPACE: u32 = 898;

/// Difficulty tier selected by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 3 pairs, 10 seconds.
    #[default]
    Easy,
    /// 6 pairs, 30 seconds.
    Medium,
    /// 12 pairs, 45 seconds.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Look up the fixed parameters for this tier.
    #[must_use]
    pub const fn tier(self) -> TierConfig {
        match self {
            Difficulty::Easy => TierConfig { pair_count: 3, starting_seconds: 10, columns: 3 },
            Difficulty::Medium => TierConfig { pair_count: 6, starting_seconds: 30, columns: 4 },
            Difficulty::Hard => TierConfig { pair_count: 12, starting_seconds: 45, columns: 6 },
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Fixed parameters of a difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Distinct identities on the board; the grid holds twice as many cards.
    pub pair_count: usize,

    /// Countdown length at round start.
    pub starting_seconds: u32,

    /// Column hint for the renderer's grid.
    pub columns: usize,
}

impl TierConfig {
    /// Total number of cards dealt.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pair_count * 2
    }
}

/// Engine tunables shared by every round of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Size of the identity space the deck builder draws from.
    pub identity_space: u32,

    /// How long a mismatched pair stays face up before flipping back.
    pub mismatch_delay: Duration,

    /// Countdown tick period.
    pub tick_period: Duration,

    /// Seconds granted by the streak bonus.
    pub bonus_seconds: u32,

    /// Streak length that fires the bonus.
    pub bonus_streak: u32,

    /// Fixed RNG seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            identity_space: DEFAULT_IDENTITY_SPACE,
            mismatch_delay: Duration::from_secs(1),
            tick_period: Duration::from_secs(1),
            bonus_seconds: 3,
            bonus_streak: 2,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity space size.
    #[must_use]
    pub fn with_identity_space(mut self, size: u32) -> Self {
        self.identity_space = size;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the bonus amount and the streak that triggers it.
    #[must_use]
    pub fn with_bonus(mut self, seconds: u32, streak: u32) -> Self {
        self.bonus_seconds = seconds;
        self.bonus_streak = streak;
        self
    }

    /// Pin the RNG seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
