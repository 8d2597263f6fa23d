//! `lift-car` — one elevator car: kinematics, doors, target list.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`elevator`]   | `Elevator`, `Direction`, `ElevatorStats`, door methods    |
//! | [`kinematics`] | `Elevator::step`, `Motion`, motion tolerances             |
//! | [`targets`]    | `TargetList` — deduplicated, direction-ordered stop list  |
//!
//! # Motion model
//!
//! Position is continuous in floor-units (`1.0` = ground floor).  Each step
//! the car accelerates toward the head of its target list, cruises at
//! `max_speed`, and brakes once the remaining distance drops inside its
//! braking distance.  Arrival snaps the car onto the exact floor so that
//! "doors open" always coincides with an integer position and zero velocity.

pub mod elevator;
pub mod kinematics;
pub mod targets;


pub use elevator::{Direction, Elevator, ElevatorStats};
pub use kinematics::{Motion, ARRIVAL_EPSILON, BRAKING_MARGIN, MIN_APPROACH_SPEED};
pub use targets::TargetList;
