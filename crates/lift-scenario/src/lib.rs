//! `lift-scenario` — scripted events replayed against simulated time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`event`]    | `ScenarioEvent`, `ScenarioAction`, `ScenarioRecord`         |
//! | [`timeline`] | `Timeline` — time-sorted events plus a playback cursor      |
//! | [`loader`]   | `load_json`, `load_json_reader`, `load_csv`, `load_csv_reader` |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! # Playback model
//!
//! ```text
//! events sorted by time (stable) ──► cursor
//! each tick: drain_due(sim_time) yields every event with time ≤ sim_time,
//!            in ascending order, exactly once
//! ```
//!
//! Unrecognised action names survive loading as [`ScenarioAction::Unknown`]
//! and are ignored by the simulation.

pub mod error;
pub mod event;
pub mod loader;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult};
pub use event::{ScenarioAction, ScenarioEvent, ScenarioRecord};
pub use loader::{load_csv, load_csv_reader, load_json, load_json_reader};
pub use timeline::Timeline;
