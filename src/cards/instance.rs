//! Card instances - runtime card state.
//!
//! `CardInstance` is one face-down tile on the board. It tracks whether the
//! tile is face up, whether its pair has been found, and whether the round
//! has ended and the tile no longer accepts clicks.

use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;

/// A card on the board.
///
/// A matched card is always also revealed. `disabled` is set once at round
/// end and is checked by renderers before forwarding clicks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Face identity, shared with exactly one other card.
    pub identity: CardIdentity,

    /// Is the card face up?
    pub revealed: bool,

    /// Has this card's pair been found?
    pub matched: bool,

    /// Does the card refuse further clicks?
    pub disabled: bool,
}

impl CardInstance {
    /// Create a face-down, clickable card.
    #[must_use]
    pub fn new(identity: CardIdentity) -> Self {
        Self {
            identity,
            revealed: false,
            matched: false,
            disabled: false,
        }
    }

    /// Face up and still waiting for its pair to be resolved.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.revealed && !self.matched
    }

    /// Could a click on this card turn it over?
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        !self.revealed && !self.matched && !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = CardInstance::new(CardIdentity(4));
        assert_eq!(card.identity, CardIdentity(4));
        assert!(!card.revealed);
        assert!(!card.matched);
        assert!(!card.disabled);
        assert!(card.is_clickable());
        assert!(!card.is_pending());
    }

    #[test]
    fn test_pending_and_matched() {
        let mut card = CardInstance::new(CardIdentity(4));
        card.revealed = true;
        assert!(card.is_pending());
        assert!(!card.is_clickable());

        card.matched = true;
        assert!(!card.is_pending());
        assert!(!card.is_clickable());
    }

    #[test]
    fn test_disabled_card_not_clickable() {
        let mut card = CardInstance::new(CardIdentity(4));
        card.disabled = true;
        assert!(!card.is_clickable());
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut card = CardInstance::new(CardIdentity(9));
        card.revealed = true;

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
