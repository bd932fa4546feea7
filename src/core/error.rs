//! Error types for round setup and reveal handling.
//!
//! None of these escape the session controller as panics. Deck errors abort
//! `start_round`; reveal errors are rejected clicks the caller may ignore.

use thiserror::Error;

use crate::cards::CardRef;

/// Failure to build a deck for a new round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The identity space cannot supply enough distinct identities.
    #[error("identity space holds {available} identities but {requested} pairs were requested")]
    InsufficientIdentitySpace {
        /// Pairs asked for.
        requested: usize,
        /// Distinct identities the space can provide.
        available: usize,
    },

    /// A deck needs at least one pair.
    #[error("a deck needs at least one pair")]
    EmptyDeck,
}

/// A rejected reveal request.
///
/// All variants are non-fatal: the board is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RevealError {
    /// The card is already face up (pending or matched).
    #[error("{0} is already revealed")]
    AlreadyRevealed(CardRef),

    /// Two cards are being compared; the reveal is dropped, not queued.
    #[error("board is locked while a pair is resolved")]
    Locked,

    /// The card was disabled at round end.
    #[error("{0} is disabled")]
    Disabled(CardRef),

    /// The round already finished.
    #[error("round is over")]
    RoundOver,

    /// The reference does not point at a card on this board.
    #[error("{0} is not on the board")]
    UnknownCard(CardRef),

    /// No round has been started since the last reset.
    #[error("no round is active")]
    NoActiveRound,
}
