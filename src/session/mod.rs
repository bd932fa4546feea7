//! Session lifecycle and the renderer seam.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{Difficulty, RoundConfig};
//! use memory_match::rules::RoundOutcome;
//! use memory_match::session::{NullRenderer, SessionController};
//! use memory_match::timer::ManualClock;
//!
//! let config = RoundConfig::new().with_seed(7);
//! let mut session = SessionController::new(config, NullRenderer, ManualClock::new());
//! session.start_round(Difficulty::Easy).unwrap();
//!
//! // Nobody clicks: the ten-second countdown runs out.
//! session.advance(Duration::from_secs(10));
//! assert_eq!(session.outcome(), Some(RoundOutcome::TimeExpired));
//! ```

mod controller;
mod renderer;

pub use controller::SessionController;
pub use renderer::{BoardRenderer, NullRenderer, RecordingRenderer, RenderCommand};
