use lift_core::{Floor, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("cannot stop: {moving} car(s) moving or between floors, {loaded} carrying passengers")]
    NotAtRest { moving: usize, loaded: usize },

    #[error("cannot reconfigure while the simulation is {0}")]
    NotStopped(&'static str),

    #[error("floor {floor} is outside the building (1..={floor_count})")]
    InvalidFloor { floor: Floor, floor_count: u32 },

    #[error("speed multiplier must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("failed to spawn the tick thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
