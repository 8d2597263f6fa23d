//! Continuous car motion.

use lift_core::Floor;

use crate::{Direction, Elevator};

/// Distance (floor-units) within which a car is considered to have arrived.
pub const ARRIVAL_EPSILON: f64 = 0.05;

/// Extra distance added to the braking distance before braking starts.
pub const BRAKING_MARGIN: f64 = 0.1;

/// Braking never slows the car below this speed (floor-units/s) while it is
/// still short of the target, so it cannot come to rest between floors.
pub const MIN_APPROACH_SPEED: f64 = 0.2;

/// Outcome of one [`Elevator::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Doors are open; the car does not move.
    Holding,
    /// No targets; the car is parked.
    Idle,
    /// Travelling toward the head target.
    Moving,
    /// Snapped onto the head target this step (or was already there).
    Arrived(Floor),
}

impl Motion {
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, Motion::Moving)
    }
}

impl Elevator {
    /// Advance the car by `dt` simulated seconds.
    pub fn step(&mut self, dt: f64) -> Motion {
        if self.doors_open {
            self.velocity = 0.0;
            return Motion::Holding;
        }
        let Some(target) = self.targets.head() else {
            self.velocity = 0.0;
            self.direction = Direction::Idle;
            return Motion::Idle;
        };

        let goal = target as f64;
        let dist = goal - self.position;
        if dist.abs() < ARRIVAL_EPSILON {
            return self.snap_to(target);
        }

        let sign = dist.signum();
        self.direction = if sign > 0.0 { Direction::Up } else { Direction::Down };

        // Speed component toward the target; negative while still moving away.
        let toward = self.velocity * sign;
        let accel_step = self.max_accel * dt;
        let braking_dist = if toward > 0.0 {
            toward * toward / (2.0 * self.max_accel)
        } else {
            0.0
        };

        let next = if toward > 0.0 && dist.abs() <= braking_dist + BRAKING_MARGIN {
            let floor_speed = MIN_APPROACH_SPEED.min(self.max_speed).min(toward);
            (toward - accel_step).max(floor_speed)
        } else if toward < self.max_speed {
            toward + accel_step
        } else {
            self.max_speed
        };
        let next = next.clamp(-self.max_speed, self.max_speed);

        self.velocity = next * sign;
        let new_position = self.position + self.velocity * dt;

        // Crossing or landing within tolerance of the target ends the run.
        let remaining = goal - new_position;
        if remaining * sign <= 0.0 || remaining.abs() < ARRIVAL_EPSILON {
            return self.snap_to(target);
        }
        self.position = new_position;
        Motion::Moving
    }

    fn snap_to(&mut self, floor: Floor) -> Motion {
        self.position = floor as f64;
        self.velocity = 0.0;
        Motion::Arrived(floor)
    }
}
