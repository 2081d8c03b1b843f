//! Unit tests for cars, the registry, the dispatcher, and the script loader.

use lift_core::{CarId, Direction, FleetPlan, Motion};

use crate::{Car, Fleet};

/// A 10-floor fleet of `car_count` cars with capacity 10, all idle at floor 1.
fn test_fleet(car_count: u16) -> Fleet {
    let plan = FleetPlan { capacity: 10, expected_peak: 10, car_count };
    Fleet::new(10, &plan).unwrap()
}

#[cfg(test)]
mod car {
    use super::*;

    #[test]
    fn add_destination_is_idempotent() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.add_destination(4);
        car.add_destination(4);
        assert_eq!(car.route, vec![4]);
    }

    #[test]
    fn add_destination_rejects_out_of_range() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.add_destination(0);
        car.add_destination(11);
        assert!(car.route.is_empty());
    }

    #[test]
    fn route_ascends_while_moving_up() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.motion = Motion::Up;
        for floor in [7, 3, 9, 5] {
            car.add_destination(floor);
        }
        assert_eq!(car.route, vec![3, 5, 7, 9]);
    }

    #[test]
    fn route_descends_while_moving_down() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.motion = Motion::Down;
        for floor in [3, 8, 5] {
            car.add_destination(floor);
        }
        assert_eq!(car.route, vec![8, 5, 3]);
    }

    #[test]
    fn route_keeps_insertion_order_while_idle() {
        let mut car = Car::new(CarId(0), 10, 10);
        for floor in [7, 2, 5] {
            car.add_destination(floor);
        }
        assert_eq!(car.route, vec![7, 2, 5]);
    }

    #[test]
    fn near_capacity_boundary_is_inclusive() {
        // capacity 10: 0.8 * 10 = 8 exactly
        let mut car = Car::new(CarId(0), 10, 10);
        car.occupancy = 7;
        assert!(!car.is_near_capacity());
        car.occupancy = 8;
        assert!(car.is_near_capacity());
    }

    #[test]
    fn near_capacity_with_fractional_threshold() {
        // capacity 7: 0.8 * 7 = 5.6 — first saturating occupancy is 6
        let mut car = Car::new(CarId(0), 7, 10);
        car.occupancy = 5;
        assert!(!car.is_near_capacity());
        car.occupancy = 6;
        assert!(car.is_near_capacity());
    }

    #[test]
    fn custom_threshold() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.occupancy = 5;
        assert!(car.is_near_capacity_at(0.5));
        assert!(!car.is_near_capacity_at(0.6));
    }

    #[test]
    fn distance_ignores_heading() {
        let mut car = Car::new(CarId(0), 10, 10);
        car.current_floor = 6;
        assert_eq!(car.distance_to(2), 4);
        assert_eq!(car.distance_to(9), 3);
        assert_eq!(car.distance_to(6), 0);
    }
}

#[cfg(test)]
mod registry {
    use lift_core::Direction;

    use crate::CallRegistry;

    #[test]
    fn record_overwrites_per_floor() {
        let mut reg = CallRegistry::new();
        reg.record(3, Direction::Up);
        reg.record(3, Direction::Down);
        assert_eq!(reg.direction_for(3), Some(Direction::Down));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn entries_are_never_removed() {
        let mut reg = CallRegistry::new();
        reg.record(2, Direction::Up);
        reg.record(9, Direction::Down);
        let floors: Vec<u8> = reg.iter().map(|(f, _)| f).collect();
        assert_eq!(floors, vec![2, 9]);
    }

    #[test]
    fn unknown_floor_has_no_entry() {
        let reg = CallRegistry::new();
        assert_eq!(reg.direction_for(5), None);
        assert!(reg.is_empty());
    }
}

#[cfg(test)]
mod dispatch {
    use super::*;
    use crate::DispatchOutcome;

    #[test]
    fn construction_follows_the_plan() {
        let fleet = test_fleet(3);
        assert_eq!(fleet.car_count(), 3);
        assert!(fleet.cars.iter().all(|c| c.capacity == 10 && c.current_floor == 1));
        assert_eq!(fleet.car(CarId(2)).unwrap().id, CarId(2));
        assert_eq!(fleet.car(CarId(3)), None);
    }

    #[test]
    fn fallback_plan_builds_two_cars_of_twenty() {
        let fleet = Fleet::new(10, &FleetPlan::FALLBACK).unwrap();
        assert_eq!(fleet.car_count(), 2);
        assert!(fleet.cars.iter().all(|c| c.capacity == 20));
    }

    #[test]
    fn invalid_plan_is_a_config_error() {
        let plan = FleetPlan { capacity: 0, expected_peak: 0, car_count: 2 };
        assert!(Fleet::new(10, &plan).is_err());
        assert!(Fleet::new(0, &FleetPlan::FALLBACK).is_err());
    }

    #[test]
    fn ties_go_to_the_lower_indexed_car() {
        // Two idle cars at floor 1; equal distance to floor 3.
        let mut fleet = test_fleet(2);
        let outcome = fleet.submit_call(3, Direction::Up);
        assert_eq!(outcome, DispatchOutcome::Assigned(CarId(0)));
        assert_eq!(fleet.cars[0].route, vec![3]);
        assert!(fleet.cars[1].route.is_empty());
    }

    #[test]
    fn nearest_idle_car_wins() {
        let mut fleet = test_fleet(2);
        fleet.cars[1].current_floor = 6;
        let outcome = fleet.submit_call(7, Direction::Up);
        assert_eq!(outcome, DispatchOutcome::Assigned(CarId(1)));
    }

    #[test]
    fn moving_car_approaching_beats_farther_idle_car() {
        let mut fleet = test_fleet(2);
        fleet.cars[0].current_floor = 1; // idle, distance 4
        fleet.cars[1].current_floor = 3; // moving up through 3, distance 2
        fleet.cars[1].motion = Motion::Up;
        let outcome = fleet.submit_call(5, Direction::Up);
        assert_eq!(outcome, DispatchOutcome::Assigned(CarId(1)));
    }

    #[test]
    fn car_past_the_floor_is_not_eligible() {
        // Moving up but already above the requested floor: would have to
        // come back, so only the idle car qualifies.
        let mut fleet = test_fleet(2);
        fleet.cars[0].current_floor = 8;
        fleet.cars[0].motion = Motion::Up;
        fleet.cars[1].current_floor = 9;
        let outcome = fleet.submit_call(4, Direction::Up);
        assert_eq!(outcome, DispatchOutcome::Assigned(CarId(1)));
    }

    #[test]
    fn opposite_motion_is_not_eligible() {
        let mut fleet = test_fleet(1);
        fleet.cars[0].current_floor = 8;
        fleet.cars[0].motion = Motion::Down;
        // Call wants up; the only car is heading down.
        assert_eq!(fleet.submit_call(9, Direction::Up), DispatchOutcome::NoCarAvailable);
    }

    #[test]
    fn saturated_fleet_yields_no_assignment() {
        let mut fleet = test_fleet(2);
        for car in &mut fleet.cars {
            car.occupancy = 8; // exactly the 0.8 boundary
        }
        let outcome = fleet.submit_call(5, Direction::Up);
        assert_eq!(outcome, DispatchOutcome::NoCarAvailable);
        assert!(fleet.cars.iter().all(|c| c.route.is_empty()));
        // The call itself was valid, so it is still recorded.
        assert_eq!(fleet.registry.direction_for(5), Some(Direction::Up));
    }

    #[test]
    fn out_of_range_floor_is_a_total_no_op() {
        let mut fleet = test_fleet(2);
        assert_eq!(fleet.submit_call(0, Direction::Up), DispatchOutcome::Rejected);
        assert_eq!(fleet.submit_call(11, Direction::Down), DispatchOutcome::Rejected);
        assert!(fleet.registry.is_empty());
        assert!(fleet.cars.iter().all(|c| c.route.is_empty()));
    }

    #[test]
    fn idle_winner_turns_toward_the_call() {
        let mut fleet = test_fleet(1);
        fleet.submit_call(4, Direction::Up);
        assert_eq!(fleet.cars[0].motion, Motion::Up);

        let mut fleet = test_fleet(1);
        fleet.cars[0].current_floor = 9;
        fleet.submit_call(4, Direction::Down);
        assert_eq!(fleet.cars[0].motion, Motion::Down);
    }

    #[test]
    fn call_at_own_floor_leaves_the_car_idle() {
        let mut fleet = test_fleet(1);
        let outcome = fleet.submit_call(1, Direction::Up);
        assert!(outcome.is_assigned());
        assert_eq!(fleet.cars[0].motion, Motion::Idle);
        assert_eq!(fleet.cars[0].route, vec![1]);
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(DispatchOutcome::Assigned(CarId(1)).assigned_car(), Some(CarId(1)));
        assert_eq!(DispatchOutcome::NoCarAvailable.assigned_car(), None);
        assert!(!DispatchOutcome::Rejected.is_assigned());
    }
}

#[cfg(test)]
mod observer {
    use super::*;
    use lift_core::HallCall;

    use crate::DispatchObserver;

    #[derive(Default)]
    struct CountingObserver {
        assigned:   Vec<(HallCall, CarId)>,
        unassigned: Vec<HallCall>,
        rejected:   Vec<u8>,
    }

    impl DispatchObserver for CountingObserver {
        fn on_assigned(&mut self, call: HallCall, car: CarId) {
            self.assigned.push((call, car));
        }
        fn on_unassigned(&mut self, call: HallCall) {
            self.unassigned.push(call);
        }
        fn on_rejected(&mut self, floor: u8, _direction: Direction) {
            self.rejected.push(floor);
        }
    }

    #[test]
    fn every_outcome_reaches_the_observer() {
        let mut fleet = test_fleet(1);
        let mut obs = CountingObserver::default();

        fleet.dispatch(HallCall::new(3, Direction::Up), &mut obs);
        fleet.cars[0].occupancy = 8;
        fleet.dispatch(HallCall::new(5, Direction::Up), &mut obs);
        fleet.dispatch(HallCall::new(0, Direction::Up), &mut obs);

        assert_eq!(obs.assigned, vec![(HallCall::new(3, Direction::Up), CarId(0))]);
        assert_eq!(obs.unassigned, vec![HallCall::new(5, Direction::Up)]);
        assert_eq!(obs.rejected, vec![0]);
    }
}

#[cfg(test)]
mod script {
    use std::io::Cursor;

    use lift_core::{Direction, HallCall};

    use crate::load_calls_reader;

    #[test]
    fn loads_calls_in_file_order() {
        let csv = "floor,direction\n3,up\n5,down\n7,up\n";
        let calls = load_calls_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            calls,
            vec![
                HallCall::new(3, Direction::Up),
                HallCall::new(5, Direction::Down),
                HallCall::new(7, Direction::Up),
            ]
        );
    }

    #[test]
    fn direction_parsing_is_case_insensitive() {
        let csv = "floor,direction\n2,UP\n4,Down\n";
        let calls = load_calls_reader(Cursor::new(csv)).unwrap();
        assert_eq!(calls[0].direction, Direction::Up);
        assert_eq!(calls[1].direction, Direction::Down);
    }

    #[test]
    fn unknown_direction_fails_the_load() {
        let csv = "floor,direction\n5,sideways\n";
        let err = load_calls_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("sideways"), "got {err}");
    }

    #[test]
    fn non_integer_floor_fails_the_load() {
        let csv = "floor,direction\nlobby,up\n";
        assert!(load_calls_reader(Cursor::new(csv)).is_err());
    }
}
