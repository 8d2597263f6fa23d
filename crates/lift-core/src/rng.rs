//! Deterministic simulation RNG wrapper.
//!
//! Every random choice in a run (rider target floors) draws from one
//! `SimRng` seeded from `SimConfig::seed`.  The tick loop is the only
//! consumer and runs under the engine lock, so draw order is fixed by tick
//! order: the same seed, scenario and `dt` sequence always produce the same
//! riders going to the same floors.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Simulation-level RNG.
///
/// Used only in single-threaded or explicitly synchronised contexts.
#[derive(Debug, Clone)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
