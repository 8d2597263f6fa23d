//! Per-car state, doors, and passengers.

use std::fmt;

use lift_core::{CarSpec, ElevatorId, Floor, PersonId};
use serde::{Deserialize, Serialize};

use crate::TargetList;

/// Tolerance used to decide whether a position is floor-aligned.
const FLOOR_ALIGN_TOLERANCE: f64 = 1e-9;

/// Travel direction.  `Idle` means the car has nothing to do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        })
    }
}

/// Cumulative per-car counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorStats {
    /// Door-open events.
    pub trips: u64,
    /// Door-open events with nobody aboard.
    pub empty_trips: u64,
    /// Riders dropped off at their destination.
    pub transported: u64,
}

impl ElevatorStats {
    /// Fraction of trips made empty, in `[0, 1]`.  `0.0` before the first trip.
    pub fn idle_share(&self) -> f64 {
        if self.trips == 0 {
            0.0
        } else {
            self.empty_trips as f64 / self.trips as f64
        }
    }
}

/// One elevator car.
///
/// # Invariants
///
/// - `passengers.len() <= capacity`
/// - `doors_open` ⟹ `velocity == 0.0` and `position` is floor-aligned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    pub id:         ElevatorId,
    pub capacity:   usize,
    /// Floor-units per second.
    pub max_speed:  f64,
    /// Floor-units per second squared.
    pub max_accel:  f64,

    /// Continuous position in floor-units; `1.0` is the ground floor.
    pub position:   f64,
    /// Signed velocity, positive upward.
    pub velocity:   f64,
    pub doors_open: bool,
    pub direction:  Direction,

    pub targets:    TargetList,
    /// Riders aboard, in boarding order.
    pub passengers: Vec<PersonId>,
    pub stats:      ElevatorStats,
}

impl Elevator {
    /// A car parked at the ground floor with doors closed.
    pub fn new(id: ElevatorId, spec: &CarSpec) -> Self {
        Self {
            id,
            capacity:   spec.capacity,
            max_speed:  spec.max_speed,
            max_accel:  spec.max_accel,
            position:   1.0,
            velocity:   0.0,
            doors_open: false,
            direction:  Direction::Idle,
            targets:    TargetList::new(),
            passengers: Vec::with_capacity(spec.capacity),
            stats:      ElevatorStats::default(),
        }
    }

    // ── Targets ───────────────────────────────────────────────────────────

    /// Add a stop (idempotent) and re-order the list for the current direction.
    pub fn add_target(&mut self, floor: Floor) -> bool {
        self.targets.add(floor, self.direction, self.position)
    }

    pub fn remove_target(&mut self, floor: Floor) -> bool {
        self.targets.remove(floor)
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    // ── Position queries ──────────────────────────────────────────────────

    /// The floor the car is aligned with, if its position is integer-valued.
    pub fn current_floor(&self) -> Option<Floor> {
        let rounded = self.position.round();
        if (self.position - rounded).abs() <= FLOOR_ALIGN_TOLERANCE && rounded >= 1.0 {
            Some(rounded as Floor)
        } else {
            None
        }
    }

    /// Zero velocity at a floor-aligned position.
    pub fn at_rest(&self) -> bool {
        self.velocity == 0.0 && self.current_floor().is_some()
    }

    // ── Passengers ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    #[inline]
    pub fn free_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.passengers.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Add a rider.  Returns `false` (and leaves the car unchanged) when full.
    pub fn board(&mut self, person: PersonId) -> bool {
        if self.is_full() {
            return false;
        }
        debug_assert!(!self.passengers.contains(&person), "{person} boarded {} twice", self.id);
        self.passengers.push(person);
        true
    }

    /// Remove and return every passenger whose destination is `floor`.
    ///
    /// `target_of` resolves a passenger's destination (the roster owns it).
    /// Remaining passengers keep their boarding order.
    pub fn unload_at<F>(&mut self, floor: Floor, mut target_of: F) -> Vec<PersonId>
    where
        F: FnMut(PersonId) -> Option<Floor>,
    {
        let mut leaving = Vec::new();
        self.passengers.retain(|&p| {
            if target_of(p) == Some(floor) {
                leaving.push(p);
                false
            } else {
                true
            }
        });
        leaving
    }

    /// Remove and return every passenger.
    pub fn take_all_passengers(&mut self) -> Vec<PersonId> {
        std::mem::take(&mut self.passengers)
    }

    // ── Doors ─────────────────────────────────────────────────────────────

    /// Closed → open.  Records a trip (and an empty trip if nobody is
    /// aboard).  No-op if the doors are already open.
    pub fn open_doors(&mut self) {
        if self.doors_open {
            return;
        }
        debug_assert!(self.current_floor().is_some(), "{} opened doors between floors", self.id);
        self.velocity = 0.0;
        self.doors_open = true;
        self.stats.trips += 1;
        if self.passengers.is_empty() {
            self.stats.empty_trips += 1;
        }
    }

    /// Open → closed.
    pub fn close_doors(&mut self) {
        self.doors_open = false;
    }
}
