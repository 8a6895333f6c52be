//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::ElevatorId;

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(ElevatorId::try_from(2usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ElevatorId(0) < ElevatorId(1));
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(1).to_string(), "E1");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor, FloorRange, LiftError};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(8)), 5);
        assert_eq!(Floor(8).distance(Floor(3)), 5);
        assert_eq!(Floor(-2).distance(Floor(2)), 4);
    }

    #[test]
    fn step_follows_direction_table() {
        assert_eq!(Floor(5).step(Direction::Up), Floor(6));
        assert_eq!(Floor(5).step(Direction::Down), Floor(4));
        assert_eq!(Floor(5).step(Direction::Idle), Floor(5));
    }

    #[test]
    fn ahead_of() {
        assert!(Floor(7).is_ahead_of(Floor(5), Direction::Up));
        assert!(!Floor(5).is_ahead_of(Floor(5), Direction::Up));
        assert!(Floor(2).is_ahead_of(Floor(5), Direction::Down));
        assert!(!Floor(7).is_ahead_of(Floor(5), Direction::Idle));
    }

    #[test]
    fn default_range_is_one_to_twenty() {
        let r = FloorRange::default();
        assert_eq!(r.min, Floor(1));
        assert_eq!(r.max, Floor(20));
        assert_eq!(r.len(), 20);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = FloorRange::default();
        assert!(r.contains(Floor(1)));
        assert!(r.contains(Floor(20)));
        assert!(!r.contains(Floor(0)));
        assert!(!r.contains(Floor(21)));
    }

    #[test]
    fn check_reports_bounds() {
        let r = FloorRange::default();
        assert_eq!(r.check(Floor(4)), Ok(Floor(4)));
        assert_eq!(
            r.check(Floor(25)),
            Err(LiftError::FloorOutOfRange { floor: Floor(25), min: Floor(1), max: Floor(20) })
        );
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(FloorRange::new(Floor(10), Floor(1)).is_err());
        assert!(FloorRange::new(Floor(3), Floor(3)).is_ok());
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, DoorState, HallDirection};

    #[test]
    fn opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    }

    #[test]
    fn hall_direction_converts() {
        assert_eq!(Direction::from(HallDirection::Up), Direction::Up);
        assert_eq!(Direction::from(HallDirection::Down), Direction::Down);
        assert!(HallDirection::Up == Direction::Up);
        assert!(HallDirection::Down != Direction::Idle);
    }

    #[test]
    fn hall_direction_parses() {
        assert_eq!("up".parse::<HallDirection>().unwrap(), HallDirection::Up);
        assert_eq!(" D ".parse::<HallDirection>().unwrap(), HallDirection::Down);
        assert!("sideways".parse::<HallDirection>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(Direction::default(), Direction::Idle);
        assert_eq!(DoorState::default(), DoorState::Closed);
        assert!(!DoorState::Closed.is_open());
    }
}

#[cfg(test)]
mod call {
    use crate::{Floor, HallCall};

    #[test]
    fn orders_by_floor_then_up_before_down() {
        let mut calls = vec![HallCall::down(5), HallCall::up(9), HallCall::up(5), HallCall::down(3)];
        calls.sort();
        assert_eq!(
            calls,
            [HallCall::down(3), HallCall::up(5), HallCall::down(5), HallCall::up(9)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(HallCall::up(5).to_string(), "5U");
        assert_eq!(HallCall::down(Floor(11)).to_string(), "11D");
    }
}

#[cfg(test)]
mod snapshot {
    use crate::{Direction, DoorState, ElevatorId, ElevatorSnapshot, Floor};

    #[test]
    fn idle_at_defaults() {
        let s = ElevatorSnapshot::idle_at(ElevatorId(0), Floor(4));
        assert_eq!(s.direction, Direction::Idle);
        assert_eq!(s.door, DoorState::Closed);
        assert!(s.cab_targets.is_empty());
    }

    #[test]
    fn clone_does_not_alias_targets() {
        let a = ElevatorSnapshot::idle_at(ElevatorId(0), Floor(1)).with_cab_targets([6, 10]);
        let mut b = a.clone();
        b.cab_targets.insert(Floor(3));
        assert_eq!(a.cab_targets.len(), 2);
        assert_eq!(b.cab_targets.len(), 3);
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, FloorRange, SimConfig};

    #[test]
    fn default_matches_reference_building() {
        let c = SimConfig::default();
        assert_eq!(c.elevator_count, 3);
        assert_eq!(c.max_rebalance_depth, 5);
        assert_eq!(c.home_floor(), Floor(1));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_elevators_rejected() {
        let c = SimConfig { elevator_count: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn empty_floor_range_rejected() {
        let c = SimConfig {
            floors: FloorRange { min: Floor(5), max: Floor(2) },
            ..SimConfig::default()
        };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<i32> = (0..16).map(|_| a.gen_range(1..=20)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.gen_range(1..=20)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = SimRng::new(1);
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }
}
