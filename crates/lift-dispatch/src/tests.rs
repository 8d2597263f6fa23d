//! Unit tests for lift-dispatch.

use lift_car::{Direction, Elevator};
use lift_core::{CarSpec, ElevatorId, PersonId};

use crate::{DispatchError, DispatchStrategy, Dispatcher, MinIdle, MinWait, Strategy};

fn car(id: u32, position: f64) -> Elevator {
    let mut e = Elevator::new(ElevatorId(id), &CarSpec::default());
    e.position = position;
    e
}

fn fill(e: &mut Elevator) {
    let mut n = 1000 * (e.id.0 + 1);
    while e.board(PersonId(n)) {
        n += 1;
    }
}

#[cfg(test)]
mod min_wait {
    use super::*;

    #[test]
    fn nearest_idle_car_wins() {
        let cars = vec![car(1, 1.0), car(2, 6.0), car(3, 9.0)];
        assert_eq!(MinWait.select(&cars, 7), Some(1));
    }

    #[test]
    fn equal_distance_prefers_fewer_targets() {
        let mut a = car(1, 3.0);
        a.add_target(9);
        let b = car(2, 7.0);
        let cars = vec![a, b];
        // both two floors from 5; car 2 has no queued stops
        assert_eq!(MinWait.select(&cars, 5), Some(1));
    }

    #[test]
    fn exact_tie_goes_to_first_car() {
        let cars = vec![car(1, 3.0), car(2, 7.0)];
        assert_eq!(MinWait.select(&cars, 5), Some(0));
    }

    #[test]
    fn idle_car_beats_one_moving_away() {
        let mut away = car(1, 5.0);
        away.direction = Direction::Up;
        let idle = car(2, 1.0);
        let cars = vec![away, idle];
        assert_eq!(MinWait.select(&cars, 3), Some(1));
    }

    #[test]
    fn down_penalty_uses_distance_to_top() {
        let mut e = car(1, 4.0);
        e.direction = Direction::Down;
        let plain = (6.0 - 4.0) / e.max_speed;
        let penalised = (2.0 + (20.0 - 4.0) * 2.0) / e.max_speed;
        assert!((MinWait::score(&e, 6) - penalised).abs() < 1e-12);
        assert!(MinWait::score(&e, 6) > plain);
    }

    #[test]
    fn full_car_is_skipped() {
        let mut full = car(1, 5.0);
        fill(&mut full);
        let cars = vec![full, car(2, 10.0)];
        assert!(MinWait::score(&cars[0], 5).is_infinite());
        assert_eq!(MinWait.select(&cars, 5), Some(1));
    }

    #[test]
    fn all_full_assigns_nothing() {
        let mut a = car(1, 2.0);
        fill(&mut a);
        assert_eq!(MinWait.select(&[a], 3), None);
    }
}

#[cfg(test)]
mod min_idle {
    use super::*;

    #[test]
    fn prefers_car_on_the_way() {
        let mut passing = car(1, 2.0);
        passing.direction = Direction::Up;
        let mut away = car(2, 7.0);
        away.direction = Direction::Up;
        let cars = vec![passing, away];
        assert_eq!(MinIdle.select(&cars, 6), Some(0));
    }

    #[test]
    fn falls_back_to_any_car_with_room() {
        let mut a = car(1, 8.0);
        a.direction = Direction::Up;
        let mut b = car(2, 1.0);
        b.direction = Direction::Down;
        let cars = vec![a, b];
        // neither is on the way to 4; car 2 is nearer
        assert_eq!(MinIdle.select(&cars, 4), Some(1));
    }

    #[test]
    fn full_cars_never_chosen() {
        let mut a = car(1, 4.0);
        fill(&mut a);
        assert_eq!(MinIdle.select(&[a], 4), None);
    }
}

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn assigns_each_unclaimed_call_once() {
        let d = Dispatcher::default();
        let mut cars = vec![car(1, 1.0), car(2, 1.0)];
        let made = d.assign([5], &mut cars, 10);
        assert_eq!(made.len(), 1);
        assert_eq!(made[0].floor, 5);
        assert_eq!(made[0].strategy, Strategy::MinWait);
        assert!(Dispatcher::is_claimed(&cars, 5));

        let again = d.assign([5], &mut cars, 10);
        assert!(again.is_empty());
        let total: usize = cars.iter().map(|c| c.targets.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn later_calls_see_earlier_assignments() {
        let d = Dispatcher::default();
        let mut cars = vec![car(1, 3.0), car(2, 3.0)];
        let made = d.assign([4, 4, 9], &mut cars, 10);
        assert_eq!(made.len(), 2);
        assert_eq!(made[0].elevator, ElevatorId(1));
        // car 1 now carries a stop, so car 2 scores lower for floor 9
        assert_eq!(made[1].elevator, ElevatorId(2));
    }

    #[test]
    fn out_of_range_calls_ignored() {
        let d = Dispatcher::default();
        let mut cars = vec![car(1, 1.0)];
        assert!(d.assign([0, 11], &mut cars, 10).is_empty());
        assert!(cars[0].targets.is_empty());
    }

    #[test]
    fn strategy_switch_applies_to_next_call() {
        let mut d = Dispatcher::new(Strategy::MinWait);
        d.set_strategy(Strategy::MinIdle);
        let mut cars = vec![car(1, 1.0)];
        let made = d.assign([3], &mut cars, 10);
        assert_eq!(made[0].strategy, Strategy::MinIdle);
    }
}

#[cfg(test)]
mod strategy {
    use super::*;

    #[test]
    fn parse_and_display() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("minIdle".parse::<Strategy>(), Ok(Strategy::MinIdle));
        assert_eq!(
            "fastest".parse::<Strategy>(),
            Err(DispatchError::UnknownStrategy("fastest".into()))
        );
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&Strategy::MinIdle).unwrap();
        assert_eq!(json, "\"min_idle\"");
        assert_eq!(Strategy::default(), Strategy::MinWait);
    }
}
