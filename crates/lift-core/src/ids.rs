//! Strongly typed identifier wrappers and the floor numbering convention.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Floors are plain 1-based `u32`
//! numbers: floor `1` is the ground floor and the evacuation level.

use std::fmt;

/// A 1-based floor number.  Valid floors of a building are `1..=floor_count`.
pub type Floor = u32;

/// The ground floor — the only floor served while the fire alarm is active.
pub const GROUND_FLOOR: Floor = 1;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The ID that follows `self` in allocation order.
            #[inline(always)]
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// Identity of a rider.  Allocated by the building's roster, starting at 1.
    pub struct PersonId(u32);
}

typed_id! {
    /// Identity of an elevator car.  Cars of a building are numbered `1..=n`.
    pub struct ElevatorId(u32);
}
