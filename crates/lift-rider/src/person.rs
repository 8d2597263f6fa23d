//! A single rider.

use std::fmt;

use lift_core::{Floor, PersonId, SimTime};
use serde::{Deserialize, Serialize};

/// Where a rider is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonState {
    /// Standing at the origin floor deciding where to go.  Not yet queued.
    Choosing,
    /// In the origin floor's queue, waiting for a car.
    Waiting,
    /// Riding a car.
    InElevator,
    /// Dropped off at the target floor.  Terminal.
    Delivered,
    /// Removed from the building by the fire alarm.  Terminal.
    Evacuated,
}

impl PersonState {
    /// `true` for `Delivered` and `Evacuated`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PersonState::Delivered | PersonState::Evacuated)
    }
}

impl fmt::Display for PersonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PersonState::Choosing   => "choosing",
            PersonState::Waiting    => "waiting",
            PersonState::InElevator => "in_elevator",
            PersonState::Delivered  => "delivered",
            PersonState::Evacuated  => "evacuated",
        };
        f.write_str(s)
    }
}

/// A rider and its timestamps.
///
/// All timestamps are simulated time.  `finished_at` is the delivery or
/// evacuation stamp, whichever ended the ride.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id:            PersonId,
    pub origin:        Floor,
    /// Chosen destination.  `None` while `Choosing`.
    pub target:        Option<Floor>,
    /// Destination fixed in advance by a scenario; honoured at decision time
    /// when it names a valid floor other than `origin`.
    pub preset_target: Option<Floor>,
    pub state:         PersonState,
    pub created_at:    SimTime,
    pub decided_at:    Option<SimTime>,
    pub boarded_at:    Option<SimTime>,
    pub finished_at:   Option<SimTime>,
}

impl Person {
    pub fn new(id: PersonId, origin: Floor, now: SimTime) -> Self {
        Self {
            id,
            origin,
            target:        None,
            preset_target: None,
            state:         PersonState::Choosing,
            created_at:    now,
            decided_at:    None,
            boarded_at:    None,
            finished_at:   None,
        }
    }

    /// `Choosing → Waiting` with the chosen destination.
    pub fn decide(&mut self, target: Floor, now: SimTime) {
        debug_assert_eq!(self.state, PersonState::Choosing, "{} decided twice", self.id);
        self.target = Some(target);
        self.decided_at = Some(now);
        self.state = PersonState::Waiting;
    }

    /// `Waiting → InElevator`.
    pub fn board(&mut self, now: SimTime) {
        debug_assert_eq!(self.state, PersonState::Waiting, "{} boarded while not waiting", self.id);
        self.boarded_at = Some(now);
        self.state = PersonState::InElevator;
    }

    /// `InElevator → Delivered`.
    pub fn deliver(&mut self, now: SimTime) {
        debug_assert_eq!(self.state, PersonState::InElevator, "{} delivered while not riding", self.id);
        self.finished_at = Some(now);
        self.state = PersonState::Delivered;
    }

    /// Any non-terminal state `→ Evacuated`.  No-op on terminal riders.
    pub fn evacuate(&mut self, now: SimTime) {
        if self.state.is_terminal() {
            return;
        }
        self.finished_at = Some(now);
        self.state = PersonState::Evacuated;
    }

    /// Seconds between choosing a destination and boarding a car.
    /// `0.0` until both have happened.
    pub fn wait_time(&self) -> f64 {
        match (self.decided_at, self.boarded_at) {
            (Some(decided), Some(boarded)) => boarded.since(decided),
            _ => 0.0,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
