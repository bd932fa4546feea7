//! # memory-match
//!
//! Engine for a timed memory-matching card game.
//!
//! ## Rules
//!
//! 1. A board holds `2 × pairs` face-down cards; every face appears twice.
//! 2. Cards are turned over two at a time. A matching pair stays face up; a
//!    mismatched pair flips back after a short delay, during which the
//!    board is locked.
//! 3. A countdown bounds the round. Two matches in a row grant bonus time,
//!    once per round.
//! 4. Finding every pair wins; running out of time loses.
//!
//! ## Architecture
//!
//! - **No drawing, no wall clock**: the engine talks to a `BoardRenderer`
//!   and a `Clock` supplied by the host.
//! - **Run to completion**: every input goes through
//!   `SessionController::reveal` or `SessionController::on_clock` and is
//!   fully handled before the call returns.
//! - **Deterministic**: with a fixed seed and `ManualClock`, a round replays
//!   identically.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Identities, instances, deck building, card store
//! - `rules`: Round state and the match resolver
//! - `triggers`: Streak bonus
//! - `timer`: Round countdown and the clock seam
//! - `events`: Round events, notices, status line
//! - `session`: Round lifecycle and the renderer seam

pub mod core;
pub mod cards;
pub mod rules;
pub mod triggers;
pub mod timer;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DeckError, RevealError,
    Difficulty, RoundConfig, TierConfig,
    GameRng,
};

pub use crate::cards::{CardIdentity, CardRef, CardInstance, CardStore, DeckBuilder};

pub use crate::rules::{MatchResolver, ResolverPhase, RoundOutcome, RoundState};

pub use crate::triggers::BonusTrigger;

pub use crate::timer::{Clock, ClockHandle, ManualClock, RoundTimer, Tick, TimerState};

pub use crate::events::{Events, Notice, RoundEvent, StatusLine};

pub use crate::session::{
    BoardRenderer, NullRenderer, RecordingRenderer, RenderCommand,
    SessionController,
};
