//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous: `SimTime` counts simulated seconds since the run began.
//! Each tick the engine measures real elapsed time, multiplies it by the speed
//! multiplier and advances the [`SimClock`] by the result.  Everything inside
//! the core (decision delays, linger delays, fire duration, scenario offsets)
//! is expressed in simulated seconds so that a run is independent of how fast
//! the host machine paced it.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute point in simulated time, in seconds since the start of the run.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds elapsed from `earlier` to `self` (never negative).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Accumulates simulated time and counts ticks.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// Accumulated simulated time.
    pub now: SimTime,
    /// Number of ticks executed so far.
    pub ticks: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `dt` simulated seconds.  Negative or non-finite
    /// `dt` values are treated as zero.
    #[inline]
    pub fn advance(&mut self, dt: f64) -> SimTime {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.now = self.now + dt;
        self.ticks += 1;
        self.now
    }

    /// Break elapsed time into (hours, minutes, seconds) for log lines.
    pub fn elapsed_hms(&self) -> (u64, u32, f64) {
        let total = self.now.0.max(0.0);
        let hours = (total / 3_600.0) as u64;
        let minutes = ((total % 3_600.0) / 60.0) as u32;
        let seconds = total % 60.0;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "tick {} ({:02}:{:02}:{:05.2})", self.ticks, h, m, s)
    }
}
