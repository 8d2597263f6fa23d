//! Aggregate counters returned by `report()` and `stop()`.

use lift_core::ElevatorId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevatorReport {
    pub id:          ElevatorId,
    pub trips:       u64,
    pub empty_trips: u64,
    pub transported: u64,
    /// `empty_trips / trips`, 0 when the car never opened its doors.
    pub idle_share:  f64,
}

/// Cumulative statistics of a run.
///
/// `fire_duration` includes the running alarm, if one is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_transported: u64,
    pub sim_time:          f64,
    pub fire_alarms:       u32,
    pub fire_duration:     f64,
    /// Mean seconds between deciding and boarding, over delivered riders.
    pub average_wait:      f64,
    pub elevators:         Vec<ElevatorReport>,
}
