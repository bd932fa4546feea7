//! Round rules: state and the match resolver.
//!
//! The resolver owns every transition of `RoundState`. Timers and renderers
//! only observe the state and feed events in.

pub mod resolver;
pub mod state;

pub use resolver::MatchResolver;
pub use state::{ResolverPhase, RoundOutcome, RoundState};
