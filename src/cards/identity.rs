//! Card identities and board positions.
//!
//! - `CardIdentity`: what is printed on the face; two cards share each one
//! - `CardRef`: where a card sits on the board (its index in the deal)

use serde::{Deserialize, Serialize};

/// Opaque face identity. Equality is the only operation the rules need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIdentity(pub u32);

impl CardIdentity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Position of a card instance on the board.
///
/// Valid refs are `0..card_count` for the current deal. A ref from a previous
/// round may point at a different card (or none) after a new deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardRef(pub usize);

impl CardRef {
    /// Get the board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over every ref on a board of `card_count` cards.
    pub fn all(card_count: usize) -> impl Iterator<Item = CardRef> {
        (0..card_count).map(CardRef)
    }
}

impl From<usize> for CardRef {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = CardIdentity::new(25);
        assert_eq!(id.raw(), 25);
        assert_eq!(format!("{}", id), "Face(25)");
        assert_eq!(id, CardIdentity(25));
        assert_ne!(id, CardIdentity(26));
    }

    #[test]
    fn test_card_ref_all() {
        let refs: Vec<_> = CardRef::all(4).collect();
        assert_eq!(refs, vec![CardRef(0), CardRef(1), CardRef(2), CardRef(3)]);
        assert_eq!(CardRef::from(7).index(), 7);
        assert_eq!(format!("{}", CardRef(7)), "Card(7)");
    }

    #[test]
    fn test_serialization() {
        let id = CardIdentity(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
