//! Building, car, and run configuration.
//!
//! `BuildingConfig` is the only piece that crosses the process boundary: UI
//! layers export it to JSON and import it back.  Import always re-validates,
//! so a hand-edited file with `num_floors = 0` is rejected exactly like a bad
//! form entry.
//!
//! ```json
//! { "num_floors": 7, "num_elevators": 2 }
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{LiftError, LiftResult};

/// Highest supported floor count.
pub const MAX_FLOORS: u32 = 20;

/// Highest supported number of cars.
pub const MAX_ELEVATORS: u32 = 5;

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Shape of the building: how many floors and how many cars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingConfig {
    /// Floor count, `1..=MAX_FLOORS`.
    pub num_floors: u32,
    /// Car count, `1..=MAX_ELEVATORS`.
    pub num_elevators: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self { num_floors: 10, num_elevators: 3 }
    }
}

impl BuildingConfig {
    /// Validated constructor.
    pub fn new(num_floors: u32, num_elevators: u32) -> LiftResult<Self> {
        let cfg = Self { num_floors, num_elevators };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject out-of-range floor or car counts.
    pub fn validate(&self) -> LiftResult<()> {
        if !(1..=MAX_FLOORS).contains(&self.num_floors) {
            return Err(LiftError::Config(format!(
                "num_floors must be in 1..={MAX_FLOORS}, got {}",
                self.num_floors
            )));
        }
        if !(1..=MAX_ELEVATORS).contains(&self.num_elevators) {
            return Err(LiftError::Config(format!(
                "num_elevators must be in 1..={MAX_ELEVATORS}, got {}",
                self.num_elevators
            )));
        }
        Ok(())
    }

    /// Serialize as JSON to any writer.
    pub fn export_json<W: Write>(&self, writer: W) -> LiftResult<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Parse and validate a JSON configuration from any reader.
    pub fn import_json<R: Read>(reader: R) -> LiftResult<Self> {
        let cfg: BuildingConfig = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Whether `floor` is a valid floor of this building.
    #[inline]
    pub fn has_floor(&self, floor: u32) -> bool {
        (1..=self.num_floors).contains(&floor)
    }
}

// ── CarSpec ───────────────────────────────────────────────────────────────────

/// Mechanical parameters shared by every car of a building.
///
/// Speeds and accelerations are in floor-units per second (squared).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    pub capacity: usize,
    pub max_speed: f64,
    pub max_accel: f64,
}

impl Default for CarSpec {
    fn default() -> Self {
        Self { capacity: 8, max_speed: 2.0, max_accel: 1.0 }
    }
}

impl CarSpec {
    pub fn validate(&self) -> LiftResult<()> {
        if self.capacity == 0 {
            return Err(LiftError::Config("car capacity must be at least 1".into()));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(LiftError::Config(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if !(self.max_accel.is_finite() && self.max_accel > 0.0) {
            return Err(LiftError::Config(format!(
                "max_accel must be positive, got {}",
                self.max_accel
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level parameters of the simulation loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical rider choices.
    pub seed: u64,

    /// Simulated seconds a new rider spends choosing a destination before
    /// joining the floor queue.
    pub decision_delay_secs: f64,

    /// Simulated seconds a delivered or evacuated rider lingers in the roster
    /// before being removed.
    pub linger_secs: f64,

    /// Real-time pause between ticks at speed 1.0.
    pub base_interval_secs: f64,

    /// Lower bound of the inter-tick pause at high speed multipliers.
    pub min_interval_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                42,
            decision_delay_secs: 3.0,
            linger_secs:         3.0,
            base_interval_secs:  0.05,
            min_interval_secs:   0.01,
        }
    }
}

impl SimConfig {
    /// Real-time pause after a tick at the given speed multiplier.
    ///
    /// Faster runs sleep less so that simulated `dt` stays small, but never
    /// below `min_interval_secs`.
    pub fn tick_interval_secs(&self, speed: f64) -> f64 {
        (self.base_interval_secs / speed.max(0.1)).max(self.min_interval_secs)
    }

    pub fn validate(&self) -> LiftResult<()> {
        for (name, v) in [
            ("decision_delay_secs", self.decision_delay_secs),
            ("linger_secs", self.linger_secs),
            ("base_interval_secs", self.base_interval_secs),
            ("min_interval_secs", self.min_interval_secs),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(LiftError::Config(format!("{name} must be a non-negative number, got {v}")));
            }
        }
        Ok(())
    }
}
