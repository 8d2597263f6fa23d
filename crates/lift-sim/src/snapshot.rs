//! Owned point-in-time copies of the world handed to observers.

use lift_car::{Direction, Elevator};
use lift_core::{ElevatorId, Floor};
use lift_dispatch::Strategy;
use serde::{Deserialize, Serialize};

/// One car as seen at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevatorSnapshot {
    pub id:          ElevatorId,
    pub position:    f64,
    pub velocity:    f64,
    pub direction:   Direction,
    pub doors_open:  bool,
    pub passengers:  usize,
    pub capacity:    usize,
    pub targets:     Vec<Floor>,
    pub trips:       u64,
    pub empty_trips: u64,
    pub transported: u64,
}

impl From<&Elevator> for ElevatorSnapshot {
    fn from(e: &Elevator) -> Self {
        Self {
            id:          e.id,
            position:    e.position,
            velocity:    e.velocity,
            direction:   e.direction,
            doors_open:  e.doors_open,
            passengers:  e.passengers.len(),
            capacity:    e.capacity,
            targets:     e.targets.as_slice().to_vec(),
            trips:       e.stats.trips,
            empty_trips: e.stats.empty_trips,
            transported: e.stats.transported,
        }
    }
}

/// The whole building at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick:              u64,
    pub sim_time:          f64,
    pub fire_active:       bool,
    pub strategy:          Strategy,
    pub elevators:         Vec<ElevatorSnapshot>,
    /// Queue length per floor, index `floor - 1`.
    pub waiting:           Vec<usize>,
    /// Riders in the roster, in any state.
    pub people:            usize,
    pub total_transported: u64,
}

impl WorldSnapshot {
    pub fn waiting_total(&self) -> usize {
        self.waiting.iter().sum()
    }

    pub fn riding_total(&self) -> usize {
        self.elevators.iter().map(|e| e.passengers).sum()
    }
}
