//! `Dispatcher` — hands unclaimed hall calls to cars.

use lift_car::Elevator;
use lift_core::{Floor, GROUND_FLOOR};

use crate::{Assignment, DispatchStrategy, Strategy};

/// Owns the active strategy and applies it to each unclaimed call.
///
/// The dispatcher itself keeps no per-call state.  Whether a floor is
/// claimed is read straight off the cars' target lists, so a call whose car
/// arrives and drops the floor is re-offered on the next pass if people
/// are still waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    strategy: Strategy,
}

impl Dispatcher {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            tracing::debug!(from = %self.strategy, to = %strategy, "dispatch strategy changed");
        }
        self.strategy = strategy;
    }

    /// Whether any car already has `floor` in its target list.
    pub fn is_claimed(cars: &[Elevator], floor: Floor) -> bool {
        cars.iter().any(|car| car.targets.contains(floor))
    }

    /// Offer every unclaimed floor in `calls` to the strategy, in order.
    ///
    /// `calls` are floors whose waiting queue is non-empty.  Floors outside
    /// `1..=floor_count` are ignored.  Each chosen car gets the floor appended
    /// to its target list before the next call is scored, so later calls see
    /// the updated lists.
    pub fn assign<I>(&self, calls: I, cars: &mut [Elevator], floor_count: u32) -> Vec<Assignment>
    where
        I: IntoIterator<Item = Floor>,
    {
        let mut made = Vec::new();
        for floor in calls {
            if !(GROUND_FLOOR..=floor_count).contains(&floor) || Self::is_claimed(cars, floor) {
                continue;
            }
            let Some(idx) = self.strategy.select(cars, floor) else {
                tracing::trace!(floor, strategy = %self.strategy, "no car available");
                continue;
            };
            let car = &mut cars[idx];
            if car.add_target(floor) {
                tracing::debug!(floor, elevator = %car.id, strategy = %self.strategy, "call assigned");
                made.push(Assignment { floor, elevator: car.id, strategy: self.strategy });
            }
        }
        made
    }
}
