//! The record of a hall call handed to a car.

use lift_core::{ElevatorId, Floor};
use serde::{Deserialize, Serialize};

use crate::Strategy;

/// A floor appended to a car's target list by [`Dispatcher::assign`][crate::Dispatcher::assign].
///
/// Assignments are informational: the target list itself is already updated
/// when the caller receives them.  The simulation logs them and tests inspect
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub floor:    Floor,
    pub elevator: ElevatorId,
    /// Strategy that made the choice.
    pub strategy: Strategy,
}
