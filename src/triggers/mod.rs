//! Triggers that react to round state changes.
//!
//! A trigger observes the round after the resolver updates it and may apply
//! a side effect. Currently there is one: the streak bonus.

pub mod bonus;

pub use bonus::BonusTrigger;
