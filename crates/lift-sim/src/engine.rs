//! `SimulationEngine` — the threaded control surface around a [`World`].
//!
//! # Threading
//!
//! ```text
//!  caller threads                     "lift-tick" thread
//!  ──────────────                     ──────────────────
//!  start/pause/resume/stop ──┐        loop {
//!  set_speed/trigger_fire  ──┼─► Mutex<Control> ◄── lock, wait while Paused,
//!  spawn_person/snapshot   ──┘        │              exit if Stopped,
//!                                     │              world.tick(real dt × speed)
//!                         Condvar ────┘            unlock
//!                                                  observer.on_tick(snapshot)
//!                                                  sleep(interval)
//!                                                }
//! ```
//!
//! All world mutation happens under the one `Control` mutex.  The observer
//! has its own mutex and only ever receives owned snapshots.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use lift_core::{BuildingConfig, Floor, PersonId};
use lift_dispatch::Strategy;
use lift_scenario::Timeline;

use crate::{Building, Report, SimError, SimObserver, SimResult, World, WorldSnapshot};

/// Engine run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::Paused  => "paused",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Control {
    world: World,
    run:   RunState,
    speed: f64,
}

struct Shared {
    control:  Mutex<Control>,
    wake:     Condvar,
    observer: Mutex<Box<dyn SimObserver>>,
}

/// Owns a [`World`] and drives it in real time on a background thread.
///
/// Every method takes `&self`; wrap the engine in an `Arc` to control it from
/// several threads.  Dropping the engine stops and joins the tick thread
/// without the at-rest check.
pub struct SimulationEngine {
    shared: Arc<Shared>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

fn lock<T: ?Sized>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimulationEngine {
    pub fn new(world: World, observer: Box<dyn SimObserver>) -> Self {
        Self {
            shared: Arc::new(Shared {
                control:  Mutex::new(Control { world, run: RunState::Stopped, speed: 1.0 }),
                wake:     Condvar::new(),
                observer: Mutex::new(observer),
            }),
            handle: Mutex::new(None),
        }
    }

    // ── Run state ─────────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        lock(&self.shared.control).run
    }

    /// Stopped or Paused → Running.  Launches the tick thread if none is
    /// alive.  No-op while already running.
    pub fn start(&self) -> SimResult<()> {
        let mut handle = lock(&self.handle);
        {
            let mut ctl = lock(&self.shared.control);
            match ctl.run {
                RunState::Running => return Ok(()),
                RunState::Paused => {
                    ctl.run = RunState::Running;
                    self.shared.wake.notify_all();
                    tracing::info!("simulation resumed");
                    return Ok(());
                }
                RunState::Stopped => {}
            }
        }

        if let Some(old) = handle.take() {
            if old.thread().id() == thread::current().id() {
                // Restarted from an observer; the current loop carries on.
                lock(&self.shared.control).run = RunState::Running;
                *handle = Some(old);
                tracing::info!("simulation restarted");
                return Ok(());
            }
            if old.join().is_err() {
                tracing::warn!("previous tick thread panicked");
            }
        }

        lock(&self.shared.control).run = RunState::Running;
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("lift-tick".to_string())
            .spawn(move || run_loop(shared));
        match spawned {
            Ok(h) => {
                *handle = Some(h);
                tracing::info!("simulation started");
                Ok(())
            }
            Err(e) => {
                lock(&self.shared.control).run = RunState::Stopped;
                Err(SimError::ThreadSpawn(e))
            }
        }
    }

    /// Running → Paused.  The tick thread blocks until resumed or stopped.
    pub fn pause(&self) {
        let mut ctl = lock(&self.shared.control);
        if ctl.run == RunState::Running {
            ctl.run = RunState::Paused;
            tracing::info!(sim_time = ctl.world.now().as_secs(), "simulation paused");
        }
    }

    /// Paused → Running.
    pub fn resume(&self) {
        let mut ctl = lock(&self.shared.control);
        if ctl.run == RunState::Paused {
            ctl.run = RunState::Running;
            self.shared.wake.notify_all();
            tracing::info!("simulation resumed");
        }
    }

    /// Stop the run if every car is empty, stationary, and on a floor.
    ///
    /// On success the tick thread is joined, the observer receives the final
    /// report, and the report is returned.  Otherwise nothing changes.
    /// Stopping an engine that is already stopped only returns the report.
    pub fn stop(&self) -> SimResult<Report> {
        let report = {
            let mut ctl = lock(&self.shared.control);
            let (moving, loaded) = ctl.world.building.unrest();
            if moving > 0 || loaded > 0 {
                tracing::warn!(moving, loaded, "stop refused: cars not at rest");
                return Err(SimError::NotAtRest { moving, loaded });
            }
            if ctl.run == RunState::Stopped {
                return Ok(ctl.world.report());
            }
            ctl.run = RunState::Stopped;
            self.shared.wake.notify_all();
            ctl.world.report()
        };

        let from_observer = self.join_tick_thread();
        tracing::info!(
            transported = report.total_transported,
            sim_time = report.sim_time,
            "simulation stopped"
        );
        // The observer lock is already held when stop comes from on_tick.
        if !from_observer {
            lock(&self.shared.observer).on_stop(&report);
        }
        Ok(report)
    }

    /// Join the tick thread.  Returns `true` when called from the tick thread
    /// itself, in which case the loop exits on its own after this tick.
    fn join_tick_thread(&self) -> bool {
        let Some(h) = lock(&self.handle).take() else { return false };
        if h.thread().id() == thread::current().id() {
            return true;
        }
        if h.join().is_err() {
            tracing::warn!("tick thread panicked");
        }
        false
    }

    // ── Speed ─────────────────────────────────────────────────────────────

    pub fn speed(&self) -> f64 {
        lock(&self.shared.control).speed
    }

    /// Set the simulated-seconds-per-real-second multiplier.  Takes effect
    /// on the next tick.
    pub fn set_speed(&self, speed: f64) -> SimResult<()> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(SimError::InvalidSpeed(speed));
        }
        lock(&self.shared.control).speed = speed;
        tracing::debug!(speed, "speed changed");
        Ok(())
    }

    /// Double the speed multiplier.  Returns the new value.
    pub fn speed_up(&self) -> f64 {
        self.scale_speed(2.0)
    }

    /// Halve the speed multiplier.  Returns the new value.
    pub fn slow_down(&self) -> f64 {
        self.scale_speed(0.5)
    }

    fn scale_speed(&self, factor: f64) -> f64 {
        let mut ctl = lock(&self.shared.control);
        let next = ctl.speed * factor;
        if next.is_finite() && next > 0.0 {
            ctl.speed = next;
        }
        tracing::debug!(speed = ctl.speed, "speed changed");
        ctl.speed
    }

    // ── World controls ────────────────────────────────────────────────────

    pub fn trigger_fire(&self) -> bool {
        lock(&self.shared.control).world.trigger_fire()
    }

    pub fn clear_fire(&self) -> bool {
        lock(&self.shared.control).world.clear_fire()
    }

    pub fn is_fire_active(&self) -> bool {
        lock(&self.shared.control).world.fire.is_active()
    }

    pub fn spawn_person(&self, floor: Floor, target: Option<Floor>) -> SimResult<PersonId> {
        lock(&self.shared.control).world.spawn_person(floor, target)
    }

    pub fn load_scenario(&self, timeline: Timeline) {
        lock(&self.shared.control).world.load_scenario(timeline);
    }

    pub fn strategy(&self) -> Strategy {
        lock(&self.shared.control).world.dispatcher.strategy()
    }

    pub fn set_strategy(&self, strategy: Strategy) {
        lock(&self.shared.control).world.set_strategy(strategy);
    }

    /// Replace the building with an empty one of the given shape.
    ///
    /// Only allowed while stopped.  The clock and counters restart; the
    /// strategy and scenario carry over with the scenario rewound.
    pub fn reconfigure(&self, config: BuildingConfig) -> SimResult<()> {
        let mut ctl = lock(&self.shared.control);
        if ctl.run != RunState::Stopped {
            return Err(SimError::NotStopped(ctl.run.as_str()));
        }
        let car_spec = ctl.world.building.car_spec;
        let building = Building::new(config, car_spec)?;
        let mut world = World::new(building, ctl.world.config().clone(), ctl.world.dispatcher.strategy())?;
        world.load_scenario(ctl.world.timeline.clone());
        ctl.world = world;
        tracing::info!(floors = config.num_floors, elevators = config.num_elevators, "building reconfigured");
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> WorldSnapshot {
        lock(&self.shared.control).world.snapshot()
    }

    pub fn report(&self) -> Report {
        lock(&self.shared.control).world.report()
    }

    pub fn is_at_rest(&self) -> bool {
        lock(&self.shared.control).world.building.is_at_rest()
    }

    /// Run `f` against the world under the engine lock.
    pub fn with_world<R>(&self, f: impl FnOnce(&World) -> R) -> R {
        f(&lock(&self.shared.control).world)
    }
}

impl Drop for SimulationEngine {
    fn drop(&mut self) {
        {
            let mut ctl = lock(&self.shared.control);
            ctl.run = RunState::Stopped;
            self.shared.wake.notify_all();
        }
        self.join_tick_thread();
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

fn run_loop(shared: Arc<Shared>) {
    let mut last = Instant::now();
    loop {
        let (snapshot, interval) = {
            let mut ctl = lock(&shared.control);
            loop {
                match ctl.run {
                    RunState::Stopped => return,
                    RunState::Running => break,
                    RunState::Paused => {
                        ctl = shared.wake.wait(ctl).unwrap_or_else(PoisonError::into_inner);
                        last = Instant::now();
                    }
                }
            }
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64() * ctl.speed;
            last = now;
            ctl.world.tick(dt);
            let interval = ctl.world.config().tick_interval_secs(ctl.speed);
            (ctl.world.snapshot(), interval)
        };

        lock(&shared.observer).on_tick(&snapshot);
        thread::sleep(Duration::from_secs_f64(interval));
    }
}
