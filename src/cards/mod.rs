//! Card system: identities, instances, deck building, and the card store.
//!
//! ## Key Types
//!
//! - `CardIdentity`: Face printed on a card; each appears exactly twice per deal
//! - `CardRef`: Board position of a card instance
//! - `CardInstance`: Runtime card state (revealed, matched, disabled)
//! - `DeckBuilder`: Draws distinct faces and shuffles the pairs
//! - `CardStore`: All card instances of the current deal

pub mod deck;
pub mod identity;
pub mod instance;
pub mod store;

pub use deck::{face_counts, DeckBuilder};
pub use identity::{CardIdentity, CardRef};
pub use instance::CardInstance;
pub use store::CardStore;
