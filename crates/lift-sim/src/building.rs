//! The `Building` aggregate: cars, floor queues, and the rider roster.

use std::collections::VecDeque;

use lift_car::Elevator;
use lift_core::{BuildingConfig, CarSpec, ElevatorId, Floor, PersonId, SimTime, GROUND_FLOOR};
use lift_rider::Roster;

use crate::{SimError, SimResult};

/// Everything physical in the simulation.
///
/// A rider id lives in exactly one place at a time: the roster alone
/// (choosing or terminal), one floor queue (waiting), or one car's passenger
/// list (riding).  All moves between these happen inside a single
/// [`World::tick`][crate::World::tick] or control call under the engine lock.
#[derive(Debug, Clone)]
pub struct Building {
    pub config:    BuildingConfig,
    pub car_spec:  CarSpec,
    pub elevators: Vec<Elevator>,
    /// FIFO waiting queues, index `floor - 1`.
    pub queues:    Vec<VecDeque<PersonId>>,
    pub roster:    Roster,
}

impl Building {
    /// An empty building.  `config` and `car_spec` are validated first.
    pub fn new(config: BuildingConfig, car_spec: CarSpec) -> SimResult<Self> {
        config.validate()?;
        car_spec.validate()?;
        let elevators = (0..config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i + 1), &car_spec))
            .collect();
        Ok(Self {
            queues: vec![VecDeque::new(); config.num_floors as usize],
            config,
            car_spec,
            elevators,
            roster: Roster::new(),
        })
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.config.num_floors
    }

    pub fn check_floor(&self, floor: Floor) -> SimResult<()> {
        if self.config.has_floor(floor) {
            Ok(())
        } else {
            Err(SimError::InvalidFloor { floor, floor_count: self.floor_count() })
        }
    }

    /// Create a rider at `floor`.  It joins the queue once it has decided.
    pub fn spawn(&mut self, floor: Floor, now: SimTime, target: Option<Floor>) -> SimResult<PersonId> {
        self.check_floor(floor)?;
        Ok(self.roster.spawn(floor, now, target))
    }

    pub fn queue(&self, floor: Floor) -> Option<&VecDeque<PersonId>> {
        floor.checked_sub(GROUND_FLOOR).and_then(|i| self.queues.get(i as usize))
    }

    pub fn queue_mut(&mut self, floor: Floor) -> Option<&mut VecDeque<PersonId>> {
        floor.checked_sub(GROUND_FLOOR).and_then(|i| self.queues.get_mut(i as usize))
    }

    /// Floors with at least one rider waiting, ascending.
    pub fn waiting_floors(&self) -> Vec<Floor> {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_empty())
            .map(|(i, _)| i as Floor + GROUND_FLOOR)
            .collect()
    }

    pub fn waiting_count(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    pub fn riding_count(&self) -> usize {
        self.elevators.iter().map(|e| e.passengers.len()).sum()
    }

    /// `(moving, loaded)` car counts.  Both zero means the building is at rest.
    pub fn unrest(&self) -> (usize, usize) {
        let moving = self.elevators.iter().filter(|e| !e.at_rest()).count();
        let loaded = self.elevators.iter().filter(|e| !e.is_empty()).count();
        (moving, loaded)
    }

    /// Every car empty, stationary, and aligned with a floor.
    pub fn is_at_rest(&self) -> bool {
        self.unrest() == (0, 0)
    }
}
