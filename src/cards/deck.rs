//! Deck building: pick distinct faces, duplicate them, shuffle.
//!
//! ```
//! use memory_match::cards::DeckBuilder;
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let deck = DeckBuilder::new(898).build(6, &mut rng).unwrap();
//! assert_eq!(deck.len(), 12);
//! ```

use rustc_hash::FxHashMap;

use super::identity::CardIdentity;
use crate::core::{DeckError, GameRng};

/// Builds shuffled decks from an identity space `1..=size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckBuilder {
    identity_space: u32,
}

impl DeckBuilder {
    /// Create a builder drawing from identities `1..=identity_space`.
    #[must_use]
    pub const fn new(identity_space: u32) -> Self {
        Self { identity_space }
    }

    /// Number of distinct identities available.
    #[must_use]
    pub const fn identity_space(&self) -> u32 {
        self.identity_space
    }

    /// Build a deck of `2 * pair_count` identities.
    ///
    /// Draws `pair_count` distinct identities without replacement, lays each
    /// down twice, then applies a uniform permutation.
    pub fn build(&self, pair_count: usize, rng: &mut GameRng) -> Result<Vec<CardIdentity>, DeckError> {
        if pair_count == 0 {
            return Err(DeckError::EmptyDeck);
        }

        let available = self.identity_space as usize;
        if available < pair_count {
            return Err(DeckError::InsufficientIdentitySpace {
                requested: pair_count,
                available,
            });
        }

        let faces: Vec<CardIdentity> = rng
            .sample_distinct(available, pair_count)
            .into_iter()
            // sample_distinct yields indices below `available`, which came from a u32
            .map(|i| CardIdentity(i as u32 + 1))
            .collect();

        let mut deck = Vec::with_capacity(pair_count * 2);
        deck.extend_from_slice(&faces);
        deck.extend_from_slice(&faces);
        rng.shuffle(&mut deck);

        debug_assert!(face_counts(&deck).values().all(|&n| n == 2));
        Ok(deck)
    }
}

/// Count how many times each identity appears in a deal.
#[must_use]
pub fn face_counts(deck: &[CardIdentity]) -> FxHashMap<CardIdentity, usize> {
    let mut counts = FxHashMap::default();
    for &face in deck {
        *counts.entry(face).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pairs() {
        let mut rng = GameRng::new(1);
        let deck = DeckBuilder::new(898).build(3, &mut rng).unwrap();

        assert_eq!(deck.len(), 6);
        let counts = face_counts(&deck);
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 2));
        assert!(deck.iter().all(|f| (1..=898).contains(&f.raw())));
    }

    #[test]
    fn test_exact_fit_space() {
        let mut rng = GameRng::new(1);
        let deck = DeckBuilder::new(3).build(3, &mut rng).unwrap();

        let mut faces: Vec<_> = face_counts(&deck).into_keys().collect();
        faces.sort();
        assert_eq!(faces, vec![CardIdentity(1), CardIdentity(2), CardIdentity(3)]);
    }

    #[test]
    fn test_insufficient_space() {
        let mut rng = GameRng::new(1);
        let err = DeckBuilder::new(5).build(6, &mut rng).unwrap_err();
        assert_eq!(err, DeckError::InsufficientIdentitySpace { requested: 6, available: 5 });
    }

    #[test]
    fn test_empty_deck() {
        let mut rng = GameRng::new(1);
        assert_eq!(DeckBuilder::new(10).build(0, &mut rng), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let builder = DeckBuilder::new(898);
        let a = builder.build(12, &mut GameRng::new(99)).unwrap();
        let b = builder.build(12, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
