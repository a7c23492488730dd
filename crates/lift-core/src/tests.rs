//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::CarId;

    #[test]
    fn index_and_ordering() {
        assert_eq!(CarId(3).index(), 3);
        assert!(CarId(0) < CarId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod floors {
    use crate::{Floor, Heading};

    #[test]
    fn bounds() {
        assert!(Floor(1).in_bounds(10));
        assert!(Floor(10).in_bounds(10));
        assert!(!Floor(0).in_bounds(10));
        assert!(!Floor(11).in_bounds(10));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(8)), 5);
        assert_eq!(Floor(8).distance(Floor(3)), 5);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn step_toward() {
        assert_eq!(Floor(4).step_toward(Heading::Up), Floor(5));
        assert_eq!(Floor(4).step_toward(Heading::Down), Floor(3));
    }

    #[test]
    fn display() {
        assert_eq!(Floor(3).to_string(), "F3");
    }
}

#[cfg(test)]
mod directions {
    use crate::{Direction, Floor, Heading};

    #[test]
    fn toward() {
        assert_eq!(Heading::toward(Floor(2), Floor(8)), Some(Heading::Up));
        assert_eq!(Heading::toward(Floor(8), Floor(2)), Some(Heading::Down));
        assert_eq!(Heading::toward(Floor(5), Floor(5)), None);
    }

    #[test]
    fn opposite() {
        assert_eq!(Heading::Up.opposite(), Heading::Down);
        assert_eq!(Heading::Down.opposite(), Heading::Up);
    }

    #[test]
    fn heading_into_direction() {
        assert_eq!(Direction::from(Heading::Up), Direction::Up);
        assert_eq!(Direction::from(Heading::Down), Direction::Down);
        assert_eq!(Direction::default(), Direction::Idle);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Idle.to_string(), "idle");
        assert_eq!(Heading::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod time {
    use crate::{BankClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = BankClock::new(1);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 2);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = BankClock::new(2);
        assert_eq!(clock.ticks_for_secs(2), 1);
        assert_eq!(clock.ticks_for_secs(3), 2);
        assert_eq!(clock.ticks_for_secs(4), 2);
    }
}

#[cfg(test)]
mod config {
    use crate::{FleetConfig, Tick};

    #[test]
    fn defaults() {
        let cfg = FleetConfig::new(2, 10);
        assert_eq!(cfg.tick_duration_secs, 1);
        assert_eq!(cfg.door_open_secs, 2);
        assert_eq!(cfg.door_open_ticks(), 2);
    }

    #[test]
    fn door_ticks_round_up_and_never_hit_zero() {
        let mut cfg = FleetConfig::new(1, 5);
        cfg.tick_duration_secs = 3;
        assert_eq!(cfg.door_open_ticks(), 1); // ceil(2/3) clamped to 1
        cfg.door_open_secs = 7;
        assert_eq!(cfg.door_open_ticks(), 3); // ceil(7/3)
    }

    #[test]
    fn snapshot_boundaries() {
        let mut cfg = FleetConfig::new(1, 5);
        cfg.snapshot_interval_ticks = 4;
        assert!(cfg.is_snapshot_tick(Tick(0)));
        assert!(!cfg.is_snapshot_tick(Tick(3)));
        assert!(cfg.is_snapshot_tick(Tick(8)));
        cfg.snapshot_interval_ticks = 0;
        assert!(!cfg.is_snapshot_tick(Tick(0)));
    }
}
