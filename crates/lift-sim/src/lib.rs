//! `lift-sim` — the elevator bank simulation: building state, tick logic,
//! and the threaded control engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`building`] | `Building` — cars, floor queues, rider roster             |
//! | [`world`]    | `World::tick` — deterministic tick logic, `TickSummary`   |
//! | [`fire`]     | `FireAlarm` — fire mode flag, count, duration             |
//! | [`engine`]   | `SimulationEngine`, `RunState` — tick thread and controls |
//! | [`builder`]  | `SimBuilder`                                              |
//! | [`observer`] | `SimObserver`, `NoopObserver`                             |
//! | [`snapshot`] | `WorldSnapshot`, `ElevatorSnapshot`                       |
//! | [`report`]   | `Report`, `ElevatorReport`                                |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::SimBuilder;
//!
//! // Synchronous, deterministic stepping:
//! let mut world = SimBuilder::new().seed(7).world()?;
//! world.spawn_person(5, None)?;
//! for _ in 0..400 {
//!     world.tick(0.05);
//! }
//!
//! // Real-time on a background thread:
//! let engine = SimBuilder::new().build()?;
//! engine.start()?;
//! engine.trigger_fire();
//! ```

pub mod builder;
pub mod building;
pub mod engine;
pub mod error;
pub mod fire;
pub mod observer;
pub mod report;
pub mod snapshot;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use building::Building;
pub use engine::{RunState, SimulationEngine};
pub use error::{SimError, SimResult};
pub use fire::FireAlarm;
pub use observer::{NoopObserver, SimObserver};
pub use report::{ElevatorReport, Report};
pub use snapshot::{ElevatorSnapshot, WorldSnapshot};
pub use world::{TickSummary, World};
