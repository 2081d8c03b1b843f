//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::CarId;

    #[test]
    fn index_roundtrip() {
        let id = CarId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CarId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(CarId::INVALID.0, u16::MAX);
        assert_eq!(CarId::default(), CarId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod call {
    use crate::{Direction, HallCall};

    #[test]
    fn parse_recognized_directions() {
        assert_eq!(Direction::parse("up"), Some(Direction::Up));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("  UP "), Some(Direction::Up));
        assert_eq!(Direction::parse("Down"), Some(Direction::Down));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Direction::parse("sideways"), None);
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("upwards"), None);
    }

    #[test]
    fn display() {
        assert_eq!(HallCall::new(3, Direction::Up).to_string(), "floor 3 up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod motion {
    use crate::{Direction, Motion};

    #[test]
    fn toward_compares_floors() {
        assert_eq!(Motion::toward(1, 5), Motion::Up);
        assert_eq!(Motion::toward(5, 1), Motion::Down);
        assert_eq!(Motion::toward(4, 4), Motion::Idle);
    }

    #[test]
    fn serves_matches_direction() {
        assert!(Motion::Up.serves(Direction::Up));
        assert!(Motion::Down.serves(Direction::Down));
        assert!(!Motion::Up.serves(Direction::Down));
        assert!(!Motion::Idle.serves(Direction::Up));
        assert!(!Motion::Idle.serves(Direction::Down));
    }

    #[test]
    fn default_is_idle() {
        assert!(Motion::default().is_idle());
    }
}

#[cfg(test)]
mod building {
    use crate::FleetPlan;

    #[test]
    fn fallback_triple() {
        let plan = FleetPlan::FALLBACK;
        assert_eq!((plan.capacity, plan.expected_peak, plan.car_count), (20, 20, 2));
        assert!(plan.is_valid());
    }

    #[test]
    fn zero_capacity_or_cars_is_invalid() {
        assert!(!FleetPlan { capacity: 0, expected_peak: 5, car_count: 2 }.is_valid());
        assert!(!FleetPlan { capacity: 8, expected_peak: 5, car_count: 0 }.is_valid());
        assert!(FleetPlan { capacity: 8, expected_peak: 0, car_count: 1 }.is_valid());
    }
}
