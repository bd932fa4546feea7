//! Round countdown and the clock seam that drives it.
//!
//! - `RoundTimer`: remaining/elapsed seconds, expiry detection
//! - `Clock`: callback scheduling supplied by the host
//! - `ManualClock`: virtual clock for tests and headless play

pub mod clock;
pub mod round_timer;

pub use clock::{Clock, ClockHandle, ManualClock};
pub use round_timer::{RoundTimer, Tick, TimerState};
