//! Core engine types: configuration, errors, RNG.
//!
//! This module contains the building blocks shared by every other module.
//! Tier parameters are a fixed table in `Difficulty`; engine tunables live in
//! `RoundConfig`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, ParseDifficultyError, RoundConfig, TierConfig, DEFAULT_IDENTITY_SPACE};
pub use error::{DeckError, RevealError};
pub use rng::GameRng;
