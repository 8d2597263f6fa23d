//! Observer hooks for rendering and data collection.

use crate::{Report, WorldSnapshot};

/// Callbacks invoked by the [`SimulationEngine`][crate::SimulationEngine].
///
/// `on_tick` runs on the tick thread after the engine lock is released, so
/// an observer may take as long as it likes without blocking control calls.
/// It only ever sees owned copies.  Both methods default to no-ops.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_tick(&mut self, snap: &WorldSnapshot) {
///         if snap.tick % self.every == 0 {
///             println!("t={:.1}s transported {}", snap.sim_time, snap.total_transported);
///         }
///     }
/// }
/// ```
pub trait SimObserver: Send + 'static {
    /// Called after every tick.
    fn on_tick(&mut self, _snapshot: &WorldSnapshot) {}

    /// Called once by a successful [`stop`][crate::SimulationEngine::stop].
    fn on_stop(&mut self, _report: &Report) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
