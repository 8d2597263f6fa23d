//! `MinIdle` — keep cars from running empty.

use lift_car::{Direction, Elevator};
use lift_core::Floor;

use crate::DispatchStrategy;

/// Prefer a car that is already idle or passing the call on its way.
///
/// Candidates are non-full cars that are idle, moving up from at or below the
/// call, or moving down from at or above it.  If there are none, every
/// non-full car is a candidate.  The nearest candidate wins; ties go to the
/// earlier car.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinIdle;

impl MinIdle {
    /// Whether `car` can pick up a call at `call` without turning around.
    pub fn on_the_way(car: &Elevator, call: Floor) -> bool {
        let call = call as f64;
        match car.direction {
            Direction::Idle => true,
            Direction::Up   => car.position <= call,
            Direction::Down => car.position >= call,
        }
    }
}

impl DispatchStrategy for MinIdle {
    fn select(&self, cars: &[Elevator], call: Floor) -> Option<usize> {
        let nearest = |candidates: &mut dyn Iterator<Item = (usize, &Elevator)>| {
            candidates
                .map(|(i, car)| (i, (car.position - call as f64).abs()))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i)
        };

        let mut passing = cars
            .iter()
            .enumerate()
            .filter(|(_, car)| !car.is_full() && MinIdle::on_the_way(car, call));
        if let Some(i) = nearest(&mut passing) {
            return Some(i);
        }

        let mut any_room = cars.iter().enumerate().filter(|(_, car)| !car.is_full());
        nearest(&mut any_room)
    }
}
