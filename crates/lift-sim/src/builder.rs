//! Fluent builder for a [`World`] or a [`SimulationEngine`].

use lift_core::{BuildingConfig, CarSpec, SimConfig};
use lift_dispatch::Strategy;
use lift_scenario::Timeline;

use crate::{Building, NoopObserver, SimObserver, SimResult, SimulationEngine, World};

/// Fluent builder.  Every input has a default.
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.building(c)`  | 10 floors, 3 cars                         |
/// | `.car_spec(s)`  | capacity 8, 2.0 floors/s, 1.0 floors/s²   |
/// | `.config(c)`    | seed 42, 3 s decision delay and linger    |
/// | `.strategy(s)`  | `Strategy::MinWait`                       |
/// | `.scenario(t)`  | no events                                 |
/// | `.observer(o)`  | `NoopObserver`                            |
///
/// # Example
///
/// ```rust,ignore
/// let engine = SimBuilder::new()
///     .building(BuildingConfig::new(12, 4)?)
///     .scenario(load_json(path)?)
///     .build()?;
/// engine.start()?;
/// ```
pub struct SimBuilder {
    building: BuildingConfig,
    car_spec: CarSpec,
    config:   SimConfig,
    strategy: Strategy,
    scenario: Option<Timeline>,
    observer: Option<Box<dyn SimObserver>>,
}

impl Default for SimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBuilder {
    pub fn new() -> Self {
        Self {
            building: BuildingConfig::default(),
            car_spec: CarSpec::default(),
            config:   SimConfig::default(),
            strategy: Strategy::default(),
            scenario: None,
            observer: None,
        }
    }

    pub fn building(mut self, config: BuildingConfig) -> Self {
        self.building = config;
        self
    }

    pub fn car_spec(mut self, spec: CarSpec) -> Self {
        self.car_spec = spec;
        self
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for changing only the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn scenario(mut self, timeline: Timeline) -> Self {
        self.scenario = Some(timeline);
        self
    }

    pub fn observer<O: SimObserver>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Validate inputs and return a stand-alone [`World`] for synchronous
    /// stepping.  Any observer is ignored.
    pub fn world(self) -> SimResult<World> {
        let building = Building::new(self.building, self.car_spec)?;
        let mut world = World::new(building, self.config, self.strategy)?;
        if let Some(timeline) = self.scenario {
            world.load_scenario(timeline);
        }
        Ok(world)
    }

    /// Validate inputs and return a stopped [`SimulationEngine`].
    pub fn build(mut self) -> SimResult<SimulationEngine> {
        let observer = self.observer.take().unwrap_or_else(|| Box::new(NoopObserver));
        let world = self.world()?;
        Ok(SimulationEngine::new(world, observer))
    }
}
