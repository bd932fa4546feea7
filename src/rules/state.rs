//! Round state: counters, the pending pair, and the board lock.
//!
//! Only the match resolver and bonus trigger mutate a `RoundState`. Everyone
//! else reads it through the accessors, which keeps the counter invariants
//! (`matches <= total_pairs`, matches never decreasing) in one place.

use serde::{Deserialize, Serialize};

use crate::cards::CardRef;

/// Where the match resolver is in its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolverPhase {
    /// No card pending.
    #[default]
    Idle,
    /// One card face up, waiting for a second.
    OneRevealed,
    /// Two cards face up and the board locked.
    Comparing,
    /// Every pair found. Terminal.
    Won,
    /// Countdown ran out. Terminal.
    TimeExpired,
}

impl ResolverPhase {
    /// Has the round ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ResolverPhase::Won | ResolverPhase::TimeExpired)
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    TimeExpired,
}

/// Aggregate state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) total_pairs: usize,
    pub(crate) matches: usize,
    pub(crate) clicks: u32,
    pub(crate) streak: u32,
    pub(crate) power_used: bool,
    pub(crate) pending_first: Option<CardRef>,
    pub(crate) pending_second: Option<CardRef>,
    pub(crate) locked: bool,
    pub(crate) phase: ResolverPhase,
}

impl RoundState {
    /// Fresh state for a round with `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: usize) -> Self {
        Self {
            total_pairs,
            matches: 0,
            clicks: 0,
            streak: 0,
            power_used: false,
            pending_first: None,
            pending_second: None,
            locked: false,
            phase: ResolverPhase::Idle,
        }
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    #[must_use]
    pub fn matches(&self) -> usize {
        self.matches
    }

    #[must_use]
    pub fn pairs_left(&self) -> usize {
        self.total_pairs - self.matches
    }

    /// Completed pair attempts, matched or not.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Consecutive matches since the last mismatch.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn power_used(&self) -> bool {
        self.power_used
    }

    /// The first card of an unresolved pair.
    #[must_use]
    pub fn pending_first(&self) -> Option<CardRef> {
        self.pending_first
    }

    /// Both cards of a pair under comparison, once the second is revealed.
    #[must_use]
    pub fn pending_pair(&self) -> Option<(CardRef, CardRef)> {
        self.pending_first.zip(self.pending_second)
    }

    /// Are reveals currently rejected because a pair is being resolved?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    /// How the round ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            ResolverPhase::Won => Some(RoundOutcome::Won),
            ResolverPhase::TimeExpired => Some(RoundOutcome::TimeExpired),
            _ => None,
        }
    }
}
