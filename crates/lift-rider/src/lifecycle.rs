//! Time-driven lifecycle transitions.
//!
//! Once per tick the simulation calls [`advance`] with the accumulated
//! simulated time.  It performs the two transitions that depend only on the
//! clock:
//!
//! 1. `Choosing → Waiting` once `decision_delay_secs` have elapsed since
//!    creation.  The caller receives the ids (in creation order) and must
//!    enqueue each one at its origin floor in that order.
//! 2. Removal of `Delivered` / `Evacuated` riders `linger_secs` after their
//!    terminal stamp.
//!
//! Everything else (boarding, delivery, evacuation) is driven by the cars.

use lift_core::{Floor, PersonId, SimConfig, SimRng, SimTime, GROUND_FLOOR};

use crate::{PersonState, Roster};

/// What changed during one call to [`advance`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Advance {
    /// Riders that just chose a destination, with their origin floor.
    pub decided: Vec<(PersonId, Floor)>,
    /// Riders removed from the roster.
    pub removed: Vec<PersonId>,
}

impl Advance {
    pub fn is_empty(&self) -> bool {
        self.decided.is_empty() && self.removed.is_empty()
    }
}

/// Pick a destination for a rider at `origin`.
///
/// A valid `preset` (a floor of the building other than `origin`) wins;
/// otherwise the choice is uniform over all other floors.  A one-floor
/// building has no other floor, so the ground floor is returned.
pub fn choose_target(
    origin:      Floor,
    preset:      Option<Floor>,
    floor_count: u32,
    rng:         &mut SimRng,
) -> Floor {
    if let Some(t) = preset {
        if t != origin && (1..=floor_count).contains(&t) {
            return t;
        }
    }
    let choices: Vec<Floor> = (1..=floor_count).filter(|&f| f != origin).collect();
    rng.choose(&choices).copied().unwrap_or(GROUND_FLOOR)
}

/// Apply clock-driven transitions to every rider in `roster`.
pub fn advance(
    roster:      &mut Roster,
    now:         SimTime,
    floor_count: u32,
    config:      &SimConfig,
    rng:         &mut SimRng,
) -> Advance {
    let mut out = Advance::default();

    for person in roster.iter_mut() {
        match person.state {
            PersonState::Choosing => {
                if now.since(person.created_at) >= config.decision_delay_secs {
                    let target = choose_target(person.origin, person.preset_target, floor_count, rng);
                    person.decide(target, now);
                    out.decided.push((person.id, person.origin));
                }
            }
            PersonState::Delivered | PersonState::Evacuated => {
                let done = person.finished_at.unwrap_or(now);
                if now.since(done) >= config.linger_secs {
                    out.removed.push(person.id);
                }
            }
            PersonState::Waiting | PersonState::InElevator => {}
        }
    }

    for &id in &out.removed {
        roster.remove(id);
    }
    out
}
