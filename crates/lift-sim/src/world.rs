//! `World` — the deterministic, single-threaded half of the simulation.
//!
//! `World::tick(dt)` performs one full tick with no wall-clock dependence:
//!
//! ```text
//! ① clock     — accumulate dt into simulated time
//! ② scenario  — fire every event whose time ≤ now, in order
//! ③ riders    — choosing → waiting (enqueue), drop lingering terminal riders
//! ④ cars      — fire mode: evacuate and send everything to floor 1
//!               otherwise: dispatch unclaimed calls, step, serve stops
//! ```
//!
//! The same seed, scenario, and `dt` sequence always produce the same state.

use std::collections::VecDeque;

use lift_car::{Elevator, Motion};
use lift_core::{Floor, PersonId, SimClock, SimConfig, SimRng, SimTime, GROUND_FLOOR};
use lift_dispatch::{Dispatcher, Strategy};
use lift_rider::{advance, PersonState, Roster};
use lift_scenario::{ScenarioAction, ScenarioEvent, Timeline};

use crate::{Building, ElevatorReport, ElevatorSnapshot, FireAlarm, Report, SimResult, WorldSnapshot};

/// Counts of what happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub events:    usize,
    pub decided:   usize,
    pub removed:   usize,
    pub assigned:  usize,
    pub boarded:   usize,
    pub delivered: usize,
    pub evacuated: usize,
}

/// Building, clock, scenario, fire state, and dispatcher in one place.
#[derive(Debug, Clone)]
pub struct World {
    pub building:      Building,
    pub dispatcher:    Dispatcher,
    pub timeline:      Timeline,
    pub fire:          FireAlarm,
    pub clock:         SimClock,
    config:            SimConfig,
    rng:               SimRng,
    total_transported: u64,
    /// Sum of wait times of delivered riders.
    total_wait:        f64,
}

impl World {
    pub fn new(building: Building, config: SimConfig, strategy: Strategy) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            building,
            dispatcher: Dispatcher::new(strategy),
            timeline: Timeline::default(),
            fire: FireAlarm::default(),
            clock: SimClock::new(),
            rng: SimRng::new(config.seed),
            config,
            total_transported: 0,
            total_wait: 0.0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    pub fn total_transported(&self) -> u64 {
        self.total_transported
    }

    /// Replace the scenario.  Playback starts from its first event.
    pub fn load_scenario(&mut self, timeline: Timeline) {
        tracing::debug!(events = timeline.len(), "scenario replaced");
        self.timeline = timeline;
        self.timeline.reset();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    pub fn tick(&mut self, dt: f64) -> TickSummary {
        let mut summary = TickSummary::default();
        let prev = self.clock.now;
        let now = self.clock.advance(dt);
        let dt = now.since(prev);

        let due = self.timeline.drain_due(now.as_secs()).to_vec();
        summary.events = due.len();
        for event in &due {
            self.apply_event(event);
        }

        let floor_count = self.building.floor_count();
        let changes = advance(&mut self.building.roster, now, floor_count, &self.config, &mut self.rng);
        summary.decided = changes.decided.len();
        summary.removed = changes.removed.len();
        for (id, origin) in changes.decided {
            match self.building.queue_mut(origin) {
                Some(queue) => queue.push_back(id),
                None => debug_assert!(false, "{id} decided at missing floor {origin}"),
            }
        }

        if self.fire.is_active() {
            self.fire_logic(dt, now, &mut summary);
        } else {
            self.normal_logic(dt, now, &mut summary);
        }

        tracing::trace!(
            tick = self.clock.ticks,
            sim_time = now.as_secs(),
            waiting = self.building.waiting_count(),
            riding = self.building.riding_count(),
            ?summary,
            "tick"
        );
        summary
    }

    fn apply_event(&mut self, event: &ScenarioEvent) {
        tracing::debug!(time = event.time, action = %event.action, "scenario event");
        match event.action {
            ScenarioAction::Spawn { floor, count, target } => {
                if !self.building.config.has_floor(floor) {
                    tracing::warn!(floor, floors = self.building.floor_count(), "spawn outside the building skipped");
                    return;
                }
                let now = self.now();
                for _ in 0..count {
                    self.building.roster.spawn(floor, now, target);
                }
            }
            ScenarioAction::FireStart => {
                self.trigger_fire();
            }
            ScenarioAction::FireEnd => {
                self.clear_fire();
            }
            ScenarioAction::Unknown(_) => {}
        }
    }

    // ── Manual controls ───────────────────────────────────────────────────

    /// Create a rider at `floor` now.  `target` presets the destination.
    pub fn spawn_person(&mut self, floor: Floor, target: Option<Floor>) -> SimResult<PersonId> {
        let now = self.now();
        let id = self.building.spawn(floor, now, target)?;
        tracing::debug!(%id, floor, "person spawned");
        Ok(id)
    }

    /// Enter fire mode.  Every car's only target becomes the ground floor and
    /// everyone not riding is evacuated immediately.  No-op if already on.
    pub fn trigger_fire(&mut self) -> bool {
        let now = self.now();
        if !self.fire.trigger(now) {
            return false;
        }
        tracing::info!(sim_time = now.as_secs(), "fire alarm triggered");
        for car in &mut self.building.elevators {
            route_to_ground(car);
        }
        evacuate_building(&mut self.building, now);
        true
    }

    /// Leave fire mode, recording the alarm.  No-op if not on.
    ///
    /// Cars still carrying riders get those riders' floors back as targets.
    /// An empty car caught between floors keeps heading to the ground floor.
    pub fn clear_fire(&mut self) -> bool {
        let now = self.now();
        if !self.fire.clear(now) {
            return false;
        }
        let Building { elevators, roster, .. } = &mut self.building;
        for car in elevators.iter_mut() {
            restore_rider_targets(car, roster);
        }
        tracing::info!(
            sim_time = now.as_secs(),
            alarms = self.fire.count,
            total_secs = self.fire.total_duration,
            "fire alarm cleared"
        );
        true
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.dispatcher.set_strategy(strategy);
    }

    // ── Normal operation ──────────────────────────────────────────────────

    fn normal_logic(&mut self, dt: f64, now: SimTime, summary: &mut TickSummary) {
        let calls = self.building.waiting_floors();
        let floor_count = self.building.floor_count();
        summary.assigned = self.dispatcher.assign(calls, &mut self.building.elevators, floor_count).len();

        let Building { elevators, queues, roster, .. } = &mut self.building;
        for car in elevators.iter_mut() {
            let motion = car.step(dt);
            let Some(floor) = car.current_floor() else { continue };
            if car.velocity != 0.0 {
                continue;
            }
            let arrived = motion == Motion::Arrived(floor);
            if !(arrived || car.doors_open) {
                continue;
            }
            let Some(queue) = floor.checked_sub(GROUND_FLOOR).and_then(|i| queues.get_mut(i as usize)) else {
                continue;
            };

            car.open_doors();

            for id in car.unload_at(floor, |p| roster.target_of(p)) {
                if let Some(person) = roster.get_mut(id) {
                    person.deliver(now);
                    self.total_wait += person.wait_time();
                }
                car.stats.transported += 1;
                self.total_transported += 1;
                summary.delivered += 1;
            }
            car.remove_target(floor);

            summary.boarded += board_from_queue(car, queue, roster, now);
            car.close_doors();
        }
    }

    // ── Fire mode ─────────────────────────────────────────────────────────

    fn fire_logic(&mut self, dt: f64, now: SimTime, summary: &mut TickSummary) {
        summary.evacuated += evacuate_building(&mut self.building, now);

        let Building { elevators, roster, .. } = &mut self.building;
        for car in elevators.iter_mut() {
            let parked = car.current_floor() == Some(GROUND_FLOOR) && car.velocity == 0.0;
            route_to_ground(car);
            if !parked {
                car.close_doors();
                if car.step(dt) != Motion::Arrived(GROUND_FLOOR) {
                    continue;
                }
            }
            car.open_doors();
            for id in car.take_all_passengers() {
                if let Some(person) = roster.get_mut(id) {
                    person.evacuate(now);
                }
                summary.evacuated += 1;
            }
        }
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick:              self.clock.ticks,
            sim_time:          self.now().as_secs(),
            fire_active:       self.fire.is_active(),
            strategy:          self.dispatcher.strategy(),
            elevators:         self.building.elevators.iter().map(ElevatorSnapshot::from).collect(),
            waiting:           self.building.queues.iter().map(|q| q.len()).collect(),
            people:            self.building.roster.len(),
            total_transported: self.total_transported,
        }
    }

    pub fn report(&self) -> Report {
        let average_wait = if self.total_transported == 0 {
            0.0
        } else {
            self.total_wait / self.total_transported as f64
        };
        Report {
            total_transported: self.total_transported,
            sim_time:          self.now().as_secs(),
            fire_alarms:       self.fire.count,
            fire_duration:     self.fire.duration_at(self.now()),
            average_wait,
            elevators: self
                .building
                .elevators
                .iter()
                .map(|e| ElevatorReport {
                    id:          e.id,
                    trips:       e.stats.trips,
                    empty_trips: e.stats.empty_trips,
                    transported: e.stats.transported,
                    idle_share:  e.stats.idle_share(),
                })
                .collect(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Board riders from the front of `queue` while the car has room.  Each
/// rider's destination joins the car's target list.
fn board_from_queue(
    car:    &mut Elevator,
    queue:  &mut VecDeque<PersonId>,
    roster: &mut Roster,
    now:    SimTime,
) -> usize {
    let mut boarded = 0;
    while !car.is_full() {
        let Some(id) = queue.pop_front() else { break };
        let Some(person) = roster.get_mut(id) else {
            debug_assert!(false, "{id} queued but missing from roster");
            continue;
        };
        car.board(id);
        person.board(now);
        if let Some(target) = person.target {
            car.add_target(target);
        }
        boarded += 1;
    }
    boarded
}

/// Make the ground floor the car's only target.
fn route_to_ground(car: &mut Elevator) {
    if car.targets.as_slice() != [GROUND_FLOOR] {
        car.clear_targets();
        car.add_target(GROUND_FLOOR);
    }
}

/// Replace the fire-mode route with the destinations of everyone aboard.
fn restore_rider_targets(car: &mut Elevator, roster: &Roster) {
    let floors: Vec<Floor> = car.passengers.iter().filter_map(|&p| roster.target_of(p)).collect();
    car.clear_targets();
    for floor in floors {
        car.add_target(floor);
    }
    if car.targets.is_empty() && !car.at_rest() {
        car.add_target(GROUND_FLOOR);
    }
}

/// Drain every floor queue and evacuate everyone still choosing.  Returns
/// the number of riders evacuated.
fn evacuate_building(building: &mut Building, now: SimTime) -> usize {
    let Building { queues, roster, .. } = building;
    let mut ids: Vec<PersonId> = queues.iter_mut().flat_map(|q| q.drain(..)).collect();
    ids.extend(roster.ids_in(PersonState::Choosing));
    for &id in &ids {
        if let Some(person) = roster.get_mut(id) {
            person.evacuate(now);
        }
    }
    ids.len()
}
