//! Clock and deadline abstractions for time-boxed search.
//!
//! The search never reads the system time directly. It polls a [`Clock`],
//! so tests can swap the wall clock for a [`StepClock`] that advances a
//! fixed logical tick per poll and makes whole runs reproducible.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Logical clock that advances by one tick every time it is read.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_binpack::ils::{Clock, StepClock};
///
/// let clock = StepClock::new(Duration::from_millis(10));
/// assert_eq!(clock.elapsed(), Duration::ZERO);
/// assert_eq!(clock.elapsed(), Duration::from_millis(10));
/// assert_eq!(clock.ticks(), 2);
/// ```
#[derive(Debug)]
pub struct StepClock {
    tick: Duration,
    ticks: Cell<u64>,
}

impl StepClock {
    /// Creates a clock that advances by `tick` per poll.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            ticks: Cell::new(0),
        }
    }

    /// Number of times the clock has been read.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}

impl Clock for StepClock {
    fn elapsed(&self) -> Duration {
        let t = self.ticks.get();
        self.ticks.set(t + 1);
        self.tick.saturating_mul(u32::try_from(t).unwrap_or(u32::MAX))
    }
}

/// An absolute point on a [`Clock`]'s timeline.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_binpack::ils::{Deadline, StepClock};
///
/// let clock = StepClock::new(Duration::from_secs(1));
/// let deadline = Deadline::after(&clock, Duration::from_secs(2)); // reads t=0
/// assert!(!deadline.is_expired(&clock)); // t=1
/// assert_eq!(deadline.remaining(&clock), Duration::ZERO); // t=2
/// assert!(deadline.is_expired(&clock)); // t=3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline {
    at: Duration,
}

impl Deadline {
    /// Creates a deadline at an absolute clock reading.
    pub fn at(at: Duration) -> Self {
        Self { at }
    }

    /// Creates a deadline `budget` after the clock's current reading.
    pub fn after<C: Clock + ?Sized>(clock: &C, budget: Duration) -> Self {
        Self {
            at: clock.elapsed().saturating_add(budget),
        }
    }

    /// The absolute clock reading of this deadline.
    pub fn instant(&self) -> Duration {
        self.at
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        self.at.saturating_sub(clock.elapsed())
    }

    /// Returns `true` once the clock has reached the deadline.
    pub fn is_expired<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        clock.elapsed() >= self.at
    }
}
