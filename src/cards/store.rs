//! Card state store.
//!
//! Holds every card instance of the current deal, indexed by `CardRef`.
//! Backed by an `im::Vector`, so cloning the store to keep a view of the
//! board is O(1).
//!
//! The store enforces per-card rules only. The board lock belongs to the
//! match resolver.

use im::Vector;
use smallvec::SmallVec;

use super::identity::{CardIdentity, CardRef};
use super::instance::CardInstance;
use crate::core::RevealError;

/// Per-card state for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vector<CardInstance>,
}

impl CardStore {
    /// Create an empty store (no round dealt).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board with face-down cards in deal order.
    pub fn deal(&mut self, identities: &[CardIdentity]) {
        self.cards = identities.iter().copied().map(CardInstance::new).collect();
    }

    /// Drop every card.
    pub fn reset(&mut self) {
        self.cards = Vector::new();
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card.
    #[must_use]
    pub fn get(&self, card: CardRef) -> Option<&CardInstance> {
        self.cards.get(card.index())
    }

    /// Identity of a card, if it is on the board.
    #[must_use]
    pub fn identity(&self, card: CardRef) -> Option<CardIdentity> {
        self.get(card).map(|c| c.identity)
    }

    /// Iterate over `(ref, card)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (CardRef, &CardInstance)> {
        self.cards.iter().enumerate().map(|(i, c)| (CardRef(i), c))
    }

    /// Identities in board order, as handed to the renderer.
    #[must_use]
    pub fn identities(&self) -> Vec<CardIdentity> {
        self.cards.iter().map(|c| c.identity).collect()
    }

    /// Cards that are face up but not yet matched.
    #[must_use]
    pub fn revealed_unmatched(&self) -> SmallVec<[CardRef; 2]> {
        self.iter()
            .filter(|(_, c)| c.is_pending())
            .map(|(r, _)| r)
            .collect()
    }

    /// Number of matched cards (twice the matched pairs).
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Turn a card face up.
    ///
    /// Revealing a card that is already face up, pending or matched, is a
    /// no-op that reports `AlreadyRevealed`.
    pub fn reveal(&mut self, card: CardRef) -> Result<(), RevealError> {
        let instance = self
            .cards
            .get_mut(card.index())
            .ok_or(RevealError::UnknownCard(card))?;

        if instance.disabled {
            return Err(RevealError::Disabled(card));
        }
        if instance.revealed || instance.matched {
            return Err(RevealError::AlreadyRevealed(card));
        }

        instance.revealed = true;
        Ok(())
    }

    /// Turn a pending card face down again.
    ///
    /// Returns `false` if the card is unknown, matched, or already face down.
    pub fn conceal(&mut self, card: CardRef) -> bool {
        match self.cards.get_mut(card.index()) {
            Some(instance) if instance.is_pending() => {
                instance.revealed = false;
                true
            }
            _ => false,
        }
    }

    /// Mark a card as part of a found pair. Matched cards stay face up.
    ///
    /// Returns `false` if the card is not on the board.
    pub fn mark_matched(&mut self, card: CardRef) -> bool {
        match self.cards.get_mut(card.index()) {
            Some(instance) => {
                instance.revealed = true;
                instance.matched = true;
                true
            }
            None => false,
        }
    }

    /// Disable every card at round end.
    pub fn disable_all(&mut self) {
        for instance in self.cards.iter_mut() {
            instance.disabled = true;
        }
    }
}
