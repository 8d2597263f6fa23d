//! `lift-core` — foundational types for the `lift_sim` elevator bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and a small external footprint (`rand`, `thiserror`,
//! `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PersonId`, `ElevatorId`, `Floor`                         |
//! | [`time`]    | `SimTime` (simulated seconds), `SimClock`                 |
//! | [`rng`]     | `SimRng` (seeded `SmallRng` wrapper)                      |
//! | [`config`]  | `BuildingConfig`, `CarSpec`, `SimConfig`                  |
//! | [`error`]   | `LiftError`, `LiftResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, CarSpec, SimConfig, MAX_ELEVATORS, MAX_FLOORS};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, Floor, PersonId, GROUND_FLOOR};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
