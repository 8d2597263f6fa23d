//! Unit tests for lift-sim.

use lift_core::{BuildingConfig, PersonId};
use lift_rider::PersonState;
use lift_scenario::{ScenarioAction, ScenarioEvent, Timeline};

use crate::{SimBuilder, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f64 = 0.05;

fn world(floors: u32, cars: u32, events: Vec<ScenarioEvent>) -> World {
    SimBuilder::new()
        .building(BuildingConfig::new(floors, cars).unwrap())
        .scenario(Timeline::new(events))
        .world()
        .unwrap()
}

/// Tick until `done` holds, returning the number of ticks taken.
fn run_until(w: &mut World, max_ticks: usize, mut done: impl FnMut(&World) -> bool) -> usize {
    for n in 1..=max_ticks {
        w.tick(DT);
        if done(w) {
            return n;
        }
    }
    panic!("condition not reached within {max_ticks} ticks (t={})", w.now());
}

/// Assert the per-car and per-rider invariants that must hold after every tick.
fn check_invariants(w: &World) {
    for car in &w.building.elevators {
        assert!(car.passengers.len() <= car.capacity, "{} over capacity", car.id);
        if car.doors_open {
            assert_eq!(car.velocity, 0.0, "{} open while moving", car.id);
            assert!(car.current_floor().is_some(), "{} open between floors", car.id);
        }
    }
    for p in w.building.roster.iter() {
        if let Some(target) = p.target {
            assert_ne!(target, p.origin, "{} targets its own floor", p.id);
        }
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use lift_core::CarSpec;

    use super::*;
    use crate::{Building, SimError};

    #[test]
    fn config_round_trip_builds_empty_building() {
        let mut buf = Vec::new();
        BuildingConfig::new(7, 2).unwrap().export_json(&mut buf).unwrap();
        let config = BuildingConfig::import_json(buf.as_slice()).unwrap();

        let b = Building::new(config, CarSpec::default()).unwrap();
        assert_eq!(b.floor_count(), 7);
        assert_eq!(b.queues.len(), 7);
        assert_eq!(b.elevators.len(), 2);
        assert!(b.roster.is_empty());
        for car in &b.elevators {
            assert_eq!(car.capacity, 8);
            assert_eq!(car.max_speed, 2.0);
            assert_eq!(car.position, 1.0);
            assert!(car.targets.is_empty());
        }
        assert!(b.is_at_rest());
    }

    #[test]
    fn out_of_range_config_rejected() {
        let too_tall = BuildingConfig { num_floors: 21, num_elevators: 2 };
        assert!(matches!(Building::new(too_tall, CarSpec::default()), Err(SimError::Config(_))));
        let no_cars = BuildingConfig { num_floors: 5, num_elevators: 0 };
        assert!(Building::new(no_cars, CarSpec::default()).is_err());
    }

    #[test]
    fn spawn_outside_building_rejected() {
        let mut w = world(5, 1, vec![]);
        let err = w.spawn_person(6, None).unwrap_err();
        assert!(matches!(err, SimError::InvalidFloor { floor: 6, floor_count: 5 }));
        assert!(w.spawn_person(0, None).is_err());
        assert!(w.building.roster.is_empty());
    }

    #[test]
    fn waiting_floors_ascending() {
        let mut b = Building::new(BuildingConfig::new(6, 1).unwrap(), CarSpec::default()).unwrap();
        b.queue_mut(5).unwrap().push_back(PersonId(1));
        b.queue_mut(2).unwrap().push_back(PersonId(2));
        assert_eq!(b.waiting_floors(), vec![2, 5]);
        assert!(b.queue(7).is_none());
        assert!(b.queue(0).is_none());
    }
}

// ── Rider flow ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rider_flow {
    use super::*;

    #[test]
    fn three_spawned_at_five_are_collected() {
        let mut w = world(10, 1, vec![ScenarioEvent::spawn(0.0, 5, 3)]);

        run_until(&mut w, 200, |w| w.building.waiting_count() == 3);
        assert_eq!(w.building.queue(5).unwrap().len(), 3);
        assert!(w.building.elevators[0].targets.contains(5));

        run_until(&mut w, 2_000, |w| {
            check_invariants(w);
            w.building.riding_count() == 3
        });
        let car = &w.building.elevators[0];
        assert_eq!(car.current_floor(), Some(5));
        assert!(!car.doors_open);
        for id in [PersonId(1), PersonId(2), PersonId(3)] {
            let p = w.building.roster.get(id).unwrap();
            assert_eq!(p.state, PersonState::InElevator);
            let target = p.target.unwrap();
            assert_ne!(target, 5);
            assert!(car.targets.contains(target), "car missing target {target}");
        }
        assert!(w.building.queue(5).unwrap().is_empty());
    }

    #[test]
    fn preset_rider_is_delivered_then_removed() {
        let mut w = world(8, 2, vec![]);
        let id = w.spawn_person(1, Some(4)).unwrap();

        run_until(&mut w, 3_000, |w| {
            check_invariants(w);
            w.total_transported() == 1
        });
        let p = w.building.roster.get(id).unwrap();
        assert_eq!(p.state, PersonState::Delivered);
        assert_eq!(p.target, Some(4));

        let report = w.report();
        assert_eq!(report.total_transported, 1);
        assert_eq!(report.elevators.iter().map(|e| e.transported).sum::<u64>(), 1);
        assert!(report.average_wait >= 0.0);

        run_until(&mut w, 200, |w| w.building.roster.is_empty());
        assert!(w.building.is_at_rest());
    }

    #[test]
    fn spawn_outside_building_is_skipped() {
        let mut w = world(5, 1, vec![
            ScenarioEvent::spawn(0.0, 9, 4),
            ScenarioEvent::new(0.0, ScenarioAction::Unknown("party".into())),
        ]);
        let summary = w.tick(DT);
        assert_eq!(summary.events, 2);
        assert!(w.building.roster.is_empty());
    }

    #[test]
    fn invariants_hold_under_load() {
        let mut events = Vec::new();
        for i in 0..12 {
            events.push(ScenarioEvent::spawn(i as f64 * 2.5, (i % 10) + 1, 3));
        }
        let mut w = world(10, 3, events);
        for _ in 0..6_000 {
            w.tick(DT);
            check_invariants(&w);
        }
        assert!(w.total_transported() > 0);
    }
}

// ── Fire mode ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fire {
    use lift_core::GROUND_FLOOR;

    use super::*;

    fn fire_world() -> World {
        world(10, 2, vec![
            ScenarioEvent::spawn_to(0.0, 3, 2, 9),
            ScenarioEvent::spawn_to(0.0, 7, 2, 1),
            ScenarioEvent::spawn(3.2, 6, 1),
            ScenarioEvent::fire_start(4.0),
        ])
    }

    #[test]
    fn override_applies_within_the_same_tick() {
        let mut w = fire_world();
        run_until(&mut w, 200, |w| w.fire.is_active());

        for car in &w.building.elevators {
            assert_eq!(car.targets.as_slice(), &[GROUND_FLOOR], "{} not routed home", car.id);
        }
        assert_eq!(w.building.waiting_count(), 0);
        assert_eq!(w.building.roster.count_in(PersonState::Waiting), 0);
        assert_eq!(w.building.roster.count_in(PersonState::Choosing), 0);
        assert_eq!(w.building.roster.count_in(PersonState::Evacuated), 5);
    }

    #[test]
    fn cars_park_at_ground_with_doors_open() {
        let mut w = fire_world();
        run_until(&mut w, 200, |w| w.fire.is_active());
        run_until(&mut w, 2_000, |w| {
            check_invariants(w);
            w.building.elevators.iter().all(|c| c.current_floor() == Some(GROUND_FLOOR) && c.doors_open)
        });
        assert_eq!(w.building.riding_count(), 0);
        assert!(w.building.elevators.iter().all(|c| c.targets.as_slice() == [GROUND_FLOOR]));

        // Dispatch resumes after clearing: the open doors close on the next tick.
        assert!(w.clear_fire());
        assert!(w.building.elevators.iter().all(|c| c.targets.is_empty()));
        w.tick(DT);
        assert!(w.building.elevators.iter().all(|c| !c.doors_open));
    }

    #[test]
    fn parked_car_keeps_ground_target() {
        let mut w = world(10, 2, vec![ScenarioEvent::fire_start(0.0)]);
        w.tick(DT);
        for car in &w.building.elevators {
            assert_eq!(car.current_floor(), Some(GROUND_FLOOR));
            assert_eq!(car.targets.as_slice(), &[GROUND_FLOOR], "{} lost its target", car.id);
            assert!(car.doors_open);
        }
        for _ in 0..20 {
            w.tick(DT);
        }
        assert!(w.building.elevators.iter().all(|c| c.targets.as_slice() == [GROUND_FLOOR]));
    }

    #[test]
    fn short_alarm_mid_ride_still_delivers() {
        let mut w = world(10, 1, vec![]);
        let rider = w.spawn_person(GROUND_FLOOR, Some(10)).unwrap();
        run_until(&mut w, 2_000, |w| w.building.elevators[0].position > 6.0);
        assert_eq!(w.building.elevators[0].passengers, vec![rider]);

        assert!(w.trigger_fire());
        for _ in 0..5 {
            w.tick(DT);
        }
        assert!(w.clear_fire());
        assert_eq!(w.building.elevators[0].targets.as_slice(), &[10]);

        run_until(&mut w, 5_000, |w| {
            check_invariants(w);
            w.total_transported() == 1
        });
        let car = &w.building.elevators[0];
        assert_eq!(car.current_floor(), Some(10));
        assert!(car.passengers.is_empty());
        assert!(w.building.is_at_rest());
    }

    #[test]
    fn empty_car_between_floors_finishes_its_run() {
        let mut w = world(10, 1, vec![]);
        w.spawn_person(8, None).unwrap();
        run_until(&mut w, 2_000, |w| w.building.elevators[0].position > 3.5);
        assert!(w.building.elevators[0].passengers.is_empty());

        assert!(w.trigger_fire());
        w.tick(DT);
        assert!(w.clear_fire());
        assert_eq!(w.building.elevators[0].targets.as_slice(), &[GROUND_FLOOR]);

        run_until(&mut w, 5_000, |w| w.building.is_at_rest());
    }

    #[test]
    fn retrigger_is_noop_and_clear_counts() {
        let mut w = world(5, 1, vec![]);
        assert!(!w.clear_fire());
        assert!(w.trigger_fire());
        assert!(!w.trigger_fire());
        for _ in 0..40 {
            w.tick(DT);
        }
        assert!(w.clear_fire());
        assert!(!w.clear_fire());

        let report = w.report();
        assert_eq!(report.fire_alarms, 1);
        assert!((report.fire_duration - 40.0 * DT).abs() < 1e-9);
    }

    #[test]
    fn scenario_fire_end_clears() {
        let mut w = world(5, 1, vec![ScenarioEvent::fire_start(0.0), ScenarioEvent::fire_end(1.0)]);
        w.tick(DT);
        assert!(w.fire.is_active());
        run_until(&mut w, 100, |w| !w.fire.is_active());
        assert_eq!(w.fire.count, 1);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use lift_dispatch::Strategy;

    use super::*;

    fn busy_scenario() -> Vec<ScenarioEvent> {
        vec![
            ScenarioEvent::spawn(0.0, 5, 3),
            ScenarioEvent::spawn(4.0, 1, 4),
            ScenarioEvent::spawn(9.0, 8, 2),
            ScenarioEvent::spawn(15.0, 3, 5),
            ScenarioEvent::spawn(22.0, 10, 2),
        ]
    }

    fn run(seed: u64, strategy: Strategy) -> World {
        let mut w = SimBuilder::new()
            .building(BuildingConfig::new(10, 3).unwrap())
            .seed(seed)
            .strategy(strategy)
            .scenario(Timeline::new(busy_scenario()))
            .world()
            .unwrap();
        for _ in 0..2_400 {
            w.tick(DT);
        }
        w
    }

    #[test]
    fn same_seed_same_outcome() {
        for strategy in Strategy::ALL {
            let a = run(7, strategy);
            let b = run(7, strategy);
            assert!(a.total_transported() > 0);
            assert_eq!(a.total_transported(), b.total_transported());
            assert_eq!(a.snapshot(), b.snapshot());
            assert_eq!(a.report(), b.report());
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::{NoopObserver, Report, RunState, SimError, SimObserver, SimulationEngine, WorldSnapshot};

    #[derive(Clone, Default)]
    struct Counting {
        ticks:   Arc<AtomicU64>,
        stopped: Arc<AtomicBool>,
    }

    impl SimObserver for Counting {
        fn on_tick(&mut self, _snapshot: &WorldSnapshot) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }
        fn on_stop(&mut self, _report: &Report) {
            self.stopped.store(true, Ordering::SeqCst);
        }
    }

    /// A world whose only car is travelling toward floor 5.
    fn moving_world() -> World {
        let mut w = world(10, 1, vec![]);
        w.spawn_person(5, None).unwrap();
        run_until(&mut w, 200, |w| w.building.elevators[0].velocity != 0.0);
        w
    }

    #[test]
    fn fresh_engine_stops_cleanly() {
        let engine = SimBuilder::new().build().unwrap();
        assert_eq!(engine.run_state(), RunState::Stopped);
        let report = engine.stop().unwrap();
        assert_eq!(report.total_transported, 0);
        assert_eq!(report.elevators.len(), 3);
        assert_eq!(engine.run_state(), RunState::Stopped);
    }

    #[test]
    fn stop_refused_while_a_car_moves() {
        let engine = SimulationEngine::new(moving_world(), Box::new(NoopObserver));
        let before = engine.snapshot();
        let err = engine.stop().unwrap_err();
        assert!(matches!(err, SimError::NotAtRest { moving: 1, .. }));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn stop_refused_leaves_pause_in_place() {
        let engine = SimulationEngine::new(moving_world(), Box::new(NoopObserver));
        engine.start().unwrap();
        engine.pause();
        assert_eq!(engine.run_state(), RunState::Paused);
        assert!(engine.stop().is_err());
        assert_eq!(engine.run_state(), RunState::Paused);
    }

    #[test]
    fn second_stop_skips_the_observer() {
        let obs = Counting::default();
        let engine = SimBuilder::new().observer(obs.clone()).build().unwrap();
        engine.start().unwrap();
        thread::sleep(Duration::from_millis(50));
        engine.stop().unwrap();
        assert!(obs.stopped.swap(false, Ordering::SeqCst));

        let report = engine.stop().unwrap();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(report, engine.report());
        assert!(!obs.stopped.load(Ordering::SeqCst));
    }

    #[test]
    fn lifecycle_and_observer() {
        let obs = Counting::default();
        let engine = SimBuilder::new().observer(obs.clone()).build().unwrap();

        engine.start().unwrap();
        assert_eq!(engine.run_state(), RunState::Running);
        engine.start().unwrap();
        thread::sleep(Duration::from_millis(200));
        assert!(obs.ticks.load(Ordering::SeqCst) > 0);

        engine.pause();
        assert_eq!(engine.run_state(), RunState::Paused);
        thread::sleep(Duration::from_millis(50));
        let paused_at = engine.snapshot().sim_time;
        thread::sleep(Duration::from_millis(150));
        assert_eq!(engine.snapshot().sim_time, paused_at);

        engine.resume();
        assert_eq!(engine.run_state(), RunState::Running);
        thread::sleep(Duration::from_millis(100));

        let report = engine.stop().unwrap();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert!(report.sim_time > 0.0);
        assert!(obs.stopped.load(Ordering::SeqCst));

        // Start again after a stop.
        engine.start().unwrap();
        assert_eq!(engine.run_state(), RunState::Running);
        engine.stop().unwrap();
    }

    #[test]
    fn speed_controls() {
        let engine = SimBuilder::new().build().unwrap();
        assert_eq!(engine.speed(), 1.0);
        assert_eq!(engine.speed_up(), 2.0);
        assert_eq!(engine.slow_down(), 1.0);
        engine.set_speed(8.0).unwrap();
        assert_eq!(engine.speed(), 8.0);
        assert!(matches!(engine.set_speed(0.0), Err(SimError::InvalidSpeed(_))));
        assert!(engine.set_speed(f64::NAN).is_err());
        assert_eq!(engine.speed(), 8.0);
    }

    #[test]
    fn reconfigure_only_when_stopped() {
        let engine = SimBuilder::new().build().unwrap();
        engine.reconfigure(BuildingConfig::new(7, 2).unwrap()).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.waiting.len(), 7);
        assert_eq!(snap.elevators.len(), 2);

        let bad = BuildingConfig { num_floors: 0, num_elevators: 2 };
        assert!(matches!(engine.reconfigure(bad), Err(SimError::Config(_))));
        assert_eq!(engine.snapshot().waiting.len(), 7);

        engine.start().unwrap();
        assert!(matches!(
            engine.reconfigure(BuildingConfig::new(5, 1).unwrap()),
            Err(SimError::NotStopped("running"))
        ));
        engine.stop().unwrap();
    }

    #[test]
    fn controls_reach_the_world() {
        let engine = SimBuilder::new().build().unwrap();
        assert!(engine.trigger_fire());
        assert!(engine.is_fire_active());
        assert!(engine.clear_fire());
        assert!(!engine.is_fire_active());

        let id = engine.spawn_person(4, None).unwrap();
        assert!(engine.with_world(|w| w.building.roster.get(id).is_some()));
        assert!(engine.spawn_person(11, None).is_err());

        engine.set_strategy(lift_dispatch::Strategy::MinIdle);
        assert_eq!(engine.strategy(), lift_dispatch::Strategy::MinIdle);

        engine.load_scenario(Timeline::new(vec![ScenarioEvent::spawn(0.0, 2, 1)]));
        assert_eq!(engine.with_world(|w| w.timeline.remaining()), 1);
    }
}
