//! Round events, notices, and the status line.
//!
//! The engine never draws anything. It reports what changed as `RoundEvent`s
//! and leaves presentation to a `BoardRenderer`.

pub mod event;
pub mod status;

pub use event::{Events, Notice, RoundEvent};
pub use status::StatusLine;
