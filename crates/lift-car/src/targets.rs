//! The ordered list of floors a car intends to stop at.

use lift_core::Floor;
use serde::{Deserialize, Serialize};

use crate::Direction;

/// Deduplicated stop list.  The head is the floor the car is driving to.
///
/// The list is re-ordered after every insert according to the car's travel
/// direction at that moment:
///
/// | Direction | Order                                          |
/// |-----------|------------------------------------------------|
/// | `Up`      | ascending floor number                         |
/// | `Down`    | descending floor number                        |
/// | `Idle`    | nearest to the current position first (stable) |
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetList {
    floors: Vec<Floor>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `floor` unless already present, then re-order.
    ///
    /// Returns `true` if the floor was newly inserted.
    pub fn add(&mut self, floor: Floor, direction: Direction, position: f64) -> bool {
        if self.floors.contains(&floor) {
            return false;
        }
        self.floors.push(floor);
        self.reorder(direction, position);
        true
    }

    /// Remove `floor` if present.  Order of the rest is preserved.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.floors.iter().position(|&f| f == floor) {
            Some(i) => {
                self.floors.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.floors.clear();
    }

    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    fn reorder(&mut self, direction: Direction, position: f64) {
        match direction {
            Direction::Up => self.floors.sort_unstable(),
            Direction::Down => self.floors.sort_unstable_by(|a, b| b.cmp(a)),
            Direction::Idle => self.floors.sort_by(|&a, &b| {
                let da = (position - a as f64).abs();
                let db = (position - b as f64).abs();
                da.total_cmp(&db)
            }),
        }
    }
}
