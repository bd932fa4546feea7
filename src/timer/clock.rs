//! Clock seam.
//!
//! The engine asks a `Clock` for callbacks and reacts to them through
//! `SessionController::on_clock`. It never reads wall-clock time.
//!
//! `ManualClock` is a virtual clock: time only moves when the host calls
//! `advance`, which makes rounds fully reproducible.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::timer::{Clock, ManualClock};
//!
//! let mut clock = ManualClock::new();
//! let tick = clock.start_interval(Duration::from_secs(1));
//! let once = clock.start_timeout(Duration::from_millis(1500));
//!
//! let fired = clock.advance(Duration::from_secs(2));
//! assert_eq!(fired, vec![tick, once, tick]);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Registration returned by a `Clock`. Never reused within one clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockHandle(pub u64);

impl std::fmt::Display for ClockHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clock({})", self.0)
    }
}

/// Callback scheduling provided by the host.
///
/// Implementations call `SessionController::on_clock(handle)` when a
/// registration comes due, on the same thread as reveal events.
pub trait Clock {
    /// Fire `handle` every `period` until cancelled.
    fn start_interval(&mut self, period: Duration) -> ClockHandle;

    /// Fire `handle` once after `delay`.
    fn start_timeout(&mut self, delay: Duration) -> ClockHandle;

    /// Cancel a registration. Unknown or spent handles are ignored.
    fn cancel(&mut self, handle: ClockHandle);
}

#[derive(Clone, Debug)]
struct Scheduled {
    handle: ClockHandle,
    due: Duration,
    period: Option<Duration>,
}

/// Virtual clock driven by explicit `advance` calls.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_handle: u64,
    scheduled: Vec<Scheduled>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live registrations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }

    /// Is `handle` still scheduled?
    #[must_use]
    pub fn is_scheduled(&self, handle: ClockHandle) -> bool {
        self.scheduled.iter().any(|s| s.handle == handle)
    }

    /// Pop the earliest registration due at or before `until`.
    ///
    /// Moves `now` to its due time. Intervals are rescheduled one period
    /// later; timeouts are removed. Ties fire in registration order.
    pub fn next_due(&mut self, until: Duration) -> Option<ClockHandle> {
        let index = self
            .scheduled
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.handle))
            .map(|(i, _)| i)?;

        let Scheduled { handle, due, period } = self.scheduled[index].clone();
        self.now = due;

        match period {
            Some(period) => self.scheduled[index].due += period,
            None => {
                self.scheduled.swap_remove(index);
            }
        }

        Some(handle)
    }

    /// Move time forward to `until` without firing anything still due.
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }

    /// Advance by `by`, returning every handle that fired, in order.
    ///
    /// Hosts that must react between fires should loop on `next_due`
    /// instead, so that cancellations take effect immediately.
    pub fn advance(&mut self, by: Duration) -> Vec<ClockHandle> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(handle) = self.next_due(until) {
            fired.push(handle);
        }
        self.settle(until);
        fired
    }

    fn schedule(&mut self, delay: Duration, period: Option<Duration>) -> ClockHandle {
        self.next_handle += 1;
        let handle = ClockHandle(self.next_handle);
        self.scheduled.push(Scheduled {
            handle,
            due: self.now + delay,
            period,
        });
        handle
    }
}

impl Clock for ManualClock {
    fn start_interval(&mut self, period: Duration) -> ClockHandle {
        // A zero period would fire forever inside one advance.
        let period = period.max(Duration::from_millis(1));
        self.schedule(period, Some(period))
    }

    fn start_timeout(&mut self, delay: Duration) -> ClockHandle {
        self.schedule(delay, None)
    }

    fn cancel(&mut self, handle: ClockHandle) {
        self.scheduled.retain(|s| s.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_interval_fires_each_period() {
        let mut clock = ManualClock::new();
        let tick = clock.start_interval(SECOND);

        assert!(clock.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), vec![tick]);
        assert_eq!(clock.advance(3 * SECOND), vec![tick, tick, tick]);
        assert_eq!(clock.now(), 4 * SECOND);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut clock = ManualClock::new();
        let once = clock.start_timeout(SECOND);

        assert_eq!(clock.advance(5 * SECOND), vec![once]);
        assert!(!clock.is_scheduled(once));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let mut clock = ManualClock::new();
        let tick = clock.start_interval(SECOND);
        let once = clock.start_timeout(SECOND);

        clock.cancel(tick);
        assert_eq!(clock.advance(2 * SECOND), vec![once]);

        // Spent and unknown handles are ignored.
        clock.cancel(once);
        clock.cancel(ClockHandle(999));
    }

    #[test]
    fn test_ties_fire_in_registration_order() {
        let mut clock = ManualClock::new();
        let a = clock.start_timeout(SECOND);
        let b = clock.start_interval(SECOND);
        assert_eq!(clock.advance(SECOND), vec![a, b]);
    }

    #[test]
    fn test_next_due_moves_time() {
        let mut clock = ManualClock::new();
        let once = clock.start_timeout(Duration::from_millis(300));

        assert_eq!(clock.next_due(SECOND), Some(once));
        assert_eq!(clock.now(), Duration::from_millis(300));
        assert_eq!(clock.next_due(SECOND), None);

        clock.settle(SECOND);
        assert_eq!(clock.now(), SECOND);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut clock = ManualClock::new();
        let a = clock.start_timeout(SECOND);
        clock.cancel(a);
        let b = clock.start_timeout(SECOND);
        assert_ne!(a, b);
    }
}
