//! `Roster` — the authoritative store of every rider in the building.
//!
//! # Why ids everywhere?
//!
//! A rider is simultaneously "in the building", "in the queue at floor 5" and
//! later "in car 2".  Holding the `Person` itself in all of those places would
//! need shared mutable handles.  Instead the roster owns every `Person`, and
//! floor queues and passenger lists store `PersonId`s:
//!
//! ```ignore
//! let id = queue.pop_front()?;               // leave the floor queue
//! roster.get_mut(id)?.board(now);            // mutate in exactly one place
//! car.passengers.push(id);                   // join the car
//! ```
//!
//! The id allocator lives here too, so two buildings in one process never
//! share a counter.

use std::collections::BTreeMap;

use lift_core::{Floor, PersonId, SimTime};

use crate::{Person, PersonState};

/// All riders of a building, keyed by id in ascending (creation) order.
#[derive(Debug, Clone)]
pub struct Roster {
    people:  BTreeMap<PersonId, Person>,
    next_id: PersonId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// An empty roster whose first allocated id is `PersonId(1)`.
    pub fn new() -> Self {
        Self { people: BTreeMap::new(), next_id: PersonId(1) }
    }

    /// Create a rider in `Choosing` at `origin` and return its fresh id.
    pub fn spawn(&mut self, origin: Floor, now: SimTime, preset_target: Option<Floor>) -> PersonId {
        let id = self.next_id;
        self.next_id = id.next();
        let mut person = Person::new(id, origin, now);
        person.preset_target = preset_target;
        self.people.insert(id, person);
        id
    }

    #[inline]
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.get_mut(&id)
    }

    /// Drop a rider from the building entirely.
    pub fn remove(&mut self, id: PersonId) -> Option<Person> {
        self.people.remove(&id)
    }

    /// Destination of a rider, if it has decided one.
    #[inline]
    pub fn target_of(&self, id: PersonId) -> Option<Floor> {
        self.people.get(&id).and_then(|p| p.target)
    }

    /// Riders in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> + '_ {
        self.people.values_mut()
    }

    /// Ids of every rider currently in `state`, ascending.
    pub fn ids_in(&self, state: PersonState) -> Vec<PersonId> {
        self.people
            .values()
            .filter(|p| p.state == state)
            .map(|p| p.id)
            .collect()
    }

    /// Number of riders currently in `state`.
    pub fn count_in(&self, state: PersonState) -> usize {
        self.people.values().filter(|p| p.state == state).count()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
