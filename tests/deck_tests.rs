//! Deck builder property tests.
//!
//! Every deal, for any seed and pair count, must contain each of exactly
//! `pair_count` distinct faces exactly twice.

use proptest::prelude::*;

use memory_match::cards::{face_counts, DeckBuilder};
use memory_match::core::{DeckError, Difficulty, GameRng, DEFAULT_IDENTITY_SPACE};

proptest! {
    #[test]
    fn deal_has_every_face_twice(seed in any::<u64>(), pair_count in 1usize..=64) {
        let mut rng = GameRng::new(seed);
        let deck = DeckBuilder::new(DEFAULT_IDENTITY_SPACE).build(pair_count, &mut rng).unwrap();

        prop_assert_eq!(deck.len(), 2 * pair_count);
        let counts = face_counts(&deck);
        prop_assert_eq!(counts.len(), pair_count);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn small_space_never_hangs(space in 0u32..12, pair_count in 1usize..24) {
        let mut rng = GameRng::new(1);
        let result = DeckBuilder::new(space).build(pair_count, &mut rng);

        if (space as usize) < pair_count {
            prop_assert_eq!(
                result,
                Err(DeckError::InsufficientIdentitySpace { requested: pair_count, available: space as usize })
            );
        } else {
            prop_assert_eq!(result.unwrap().len(), 2 * pair_count);
        }
    }
}

/// Each difficulty tier deals a valid board from the default catalogue.
#[test]
fn test_tier_decks() {
    let builder = DeckBuilder::new(DEFAULT_IDENTITY_SPACE);
    let mut rng = GameRng::new(2024);

    for difficulty in Difficulty::ALL {
        let tier = difficulty.tier();
        let deck = builder.build(tier.pair_count, &mut rng).unwrap();
        assert_eq!(deck.len(), tier.card_count(), "{} deck size", difficulty);
        assert_eq!(face_counts(&deck).len(), tier.pair_count, "{} distinct faces", difficulty);
    }
}

/// Shuffling is not a no-op: across seeds, the two copies of a face are not
/// always laid next to each other.
#[test]
fn test_deals_are_shuffled() {
    let builder = DeckBuilder::new(DEFAULT_IDENTITY_SPACE);
    let mut layouts = std::collections::HashSet::new();

    for seed in 0..20 {
        let deck = builder.build(6, &mut GameRng::new(seed)).unwrap();
        let first = deck[0];
        let partner = deck.iter().rposition(|&f| f == first).unwrap();
        layouts.insert(partner);
    }

    assert!(layouts.len() > 1, "partner of the first card always at the same position");
}
