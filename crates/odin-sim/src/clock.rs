//! Monotonic time sources for the stepper.
//!
//! The engine never assumes a scheduling primitive. It only asks a clock for
//! "time since origin" when it is armed and when a tick arrives.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic clock measured from an arbitrary origin.
pub trait MissionClock {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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

impl MissionClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced explicitly. Clones share the same time.
///
/// Used for deterministic tests and fast-forward runs.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Move virtual time forward by fractional seconds. Negative values are ignored.
    pub fn advance_secs(&self, secs: f64) {
        if secs > 0.0 {
            self.advance(Duration::from_secs_f64(secs));
        }
    }
}

impl MissionClock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}
