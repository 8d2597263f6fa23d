//! The `DispatchStrategy` trait, the closed `Strategy` set, and `MinWait`.

use std::fmt;
use std::str::FromStr;

use lift_car::{Direction, Elevator};
use lift_core::{Floor, MAX_FLOORS};
use serde::{Deserialize, Serialize};

use crate::{DispatchError, DispatchResult, MinIdle};

/// Seconds charged per stop already queued on a car.
const STOP_COST_SECS: f64 = 2.0;

/// Multiplier of the detour penalty for a car heading away from the call.
const DETOUR_FACTOR: f64 = 2.0;

/// Picks the car that should serve a hall call.
///
/// Implementations are stateless and only read the cars.  Returning `None`
/// leaves the call unclaimed; it is offered again on the next tick.
///
/// # Example
///
/// ```rust,ignore
/// struct FirstCar;
///
/// impl DispatchStrategy for FirstCar {
///     fn select(&self, cars: &[Elevator], _call: Floor) -> Option<usize> {
///         cars.iter().position(|c| !c.is_full())
///     }
/// }
/// ```
pub trait DispatchStrategy: Send + Sync + 'static {
    /// Index into `cars` of the chosen car for a call at `call`.
    fn select(&self, cars: &[Elevator], call: Floor) -> Option<usize>;
}

// ── MinWait ───────────────────────────────────────────────────────────────────

/// Minimise the caller's expected wait.
///
/// ```text
/// score = effective_distance / max_speed + 2 s × queued stops
/// ```
///
/// `effective_distance` is the straight distance plus a detour penalty when
/// the car is heading away from the call: `2 × position` going up past the
/// call, `2 × (20 − position)` going down past it.  Full cars score
/// `+∞`.  The lowest score wins; ties go to the earlier car.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinWait;

impl MinWait {
    /// The score of `car` for a call at `call`.  Lower is better.
    pub fn score(car: &Elevator, call: Floor) -> f64 {
        if car.is_full() {
            return f64::INFINITY;
        }
        let call = call as f64;
        let mut distance = (car.position - call).abs();
        match car.direction {
            Direction::Up if call < car.position => {
                distance += car.position * DETOUR_FACTOR;
            }
            Direction::Down if call > car.position => {
                distance += (MAX_FLOORS as f64 - car.position) * DETOUR_FACTOR;
            }
            _ => {}
        }
        distance / car.max_speed + car.targets.len() as f64 * STOP_COST_SECS
    }
}

impl DispatchStrategy for MinWait {
    fn select(&self, cars: &[Elevator], call: Floor) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, car) in cars.iter().enumerate() {
            let score = MinWait::score(car, call);
            if score.is_finite() && best.is_none_or(|(_, s)| score < s) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| i)
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// The strategies a simulation can switch between at runtime.
///
/// Parses from / displays as `"min_wait"` and `"min_idle"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    MinWait,
    MinIdle,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::MinWait, Strategy::MinIdle];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::MinWait => "min_wait",
            Strategy::MinIdle => "min_idle",
        }
    }
}

impl DispatchStrategy for Strategy {
    fn select(&self, cars: &[Elevator], call: Floor) -> Option<usize> {
        match self {
            Strategy::MinWait => MinWait.select(cars, call),
            Strategy::MinIdle => MinIdle.select(cars, call),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        match s.trim() {
            "min_wait" | "minWait" => Ok(Strategy::MinWait),
            "min_idle" | "minIdle" => Ok(Strategy::MinIdle),
            other => Err(DispatchError::UnknownStrategy(other.to_owned())),
        }
    }
}
