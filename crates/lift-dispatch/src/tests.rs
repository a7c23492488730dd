//! Unit tests for request validation and car selection.

use lift_car::{CarView, DoorState};
use lift_core::{CarId, Direction, Floor, Heading};

use crate::{is_eligible, select_car, DispatchError, PickupRequest};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLOORS: u8 = 10;

fn req(from: u8, to: u8) -> PickupRequest {
    PickupRequest::new(Floor(from), Floor(to), FLOORS).unwrap()
}

fn idle_view(id: u32, floor: u8) -> CarView {
    CarView {
        id: CarId(id),
        floor: Floor(floor),
        direction: Direction::Idle,
        door: DoorState::Closed,
        destinations: Vec::new(),
    }
}

fn busy_view(id: u32, floor: u8, destinations: &[u8]) -> CarView {
    let dests: Vec<Floor> = destinations.iter().map(|&f| Floor(f)).collect();
    let direction = match Heading::toward(Floor(floor), dests[0]) {
        Some(h) => h.into(),
        None => Direction::Idle,
    };
    CarView {
        id: CarId(id),
        floor: Floor(floor),
        direction,
        door: DoorState::Closed,
        destinations: dests,
    }
}

// ── Request validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn same_floor_is_invalid() {
        let err = PickupRequest::new(Floor(4), Floor(4), FLOORS).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidRequest { .. }));
    }

    #[test]
    fn out_of_bounds_is_invalid() {
        assert!(matches!(
            PickupRequest::new(Floor(0), Floor(4), FLOORS),
            Err(DispatchError::InvalidRequest { .. })
        ));
        assert!(matches!(
            PickupRequest::new(Floor(4), Floor(11), FLOORS),
            Err(DispatchError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn heading_follows_the_pair() {
        assert_eq!(req(2, 9).heading(), Heading::Up);
        assert_eq!(req(9, 2).heading(), Heading::Down);
    }
}

// ── Eligibility ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod eligibility {
    use super::*;

    #[test]
    fn idle_car_is_always_eligible() {
        let view = idle_view(0, 7);
        assert!(is_eligible(&view, &req(2, 9)));
        assert!(is_eligible(&view, &req(9, 2)));
    }

    #[test]
    fn door_open_car_with_empty_queue_counts_as_idle() {
        let mut view = idle_view(0, 5);
        view.door = DoorState::Open;
        assert!(is_eligible(&view, &req(2, 9)));
    }

    #[test]
    fn en_route_same_direction_is_eligible() {
        // Headed up from 2 toward 8: pickup 4 → 6 is on the way.
        let view = busy_view(0, 2, &[8]);
        assert!(is_eligible(&view, &req(4, 6)));
        // Pickup exactly at the next stop still counts.
        assert!(is_eligible(&view, &req(8, 9)));
    }

    #[test]
    fn drop_off_reversing_makes_a_busy_car_ineligible() {
        let view = busy_view(0, 2, &[8]);
        assert!(!is_eligible(&view, &req(4, 3)));
    }

    #[test]
    fn pickup_behind_or_at_a_moving_car_is_ineligible() {
        let view = busy_view(0, 4, &[8]);
        assert!(!is_eligible(&view, &req(3, 6))); // behind
        assert!(!is_eligible(&view, &req(4, 6))); // departing this floor
    }

    #[test]
    fn pickup_beyond_the_next_stop_is_ineligible() {
        let view = busy_view(0, 2, &[6]);
        assert!(!is_eligible(&view, &req(7, 9)));
    }

    #[test]
    fn downward_rules_mirror_upward() {
        // Headed down from 9 toward 1.
        let view = busy_view(0, 9, &[1]);
        assert!(is_eligible(&view, &req(5, 2)));
        assert!(!is_eligible(&view, &req(5, 9))); // upward continuation
        assert!(!is_eligible(&view, &req(9, 5))); // departing this floor
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn nearest_idle_car_wins() {
        let cars = vec![idle_view(0, 3), idle_view(1, 6)];
        assert_eq!(select_car(&cars, &req(5, 8)), Some(CarId(1)));
    }

    #[test]
    fn equal_distances_break_to_the_lowest_id() {
        // id 0 at floor 6 and id 1 at floor 4 are both one floor from the
        // pickup at 5 — the tie goes to id 0.
        let cars = vec![idle_view(0, 6), idle_view(1, 4)];
        assert_eq!(select_car(&cars, &req(5, 8)), Some(CarId(0)));
    }

    #[test]
    fn tie_break_ignores_slice_order() {
        let cars = vec![idle_view(1, 4), idle_view(0, 6)];
        assert_eq!(select_car(&cars, &req(5, 8)), Some(CarId(0)));
    }

    #[test]
    fn busy_eligible_car_can_beat_a_farther_idle_one() {
        let cars = vec![busy_view(0, 4, &[9]), idle_view(1, 1)];
        assert_eq!(select_car(&cars, &req(5, 7)), Some(CarId(0)));
    }

    #[test]
    fn no_eligible_car_returns_none() {
        // Single car headed down 9 → 1; pickup requires upward continuation.
        let cars = vec![busy_view(0, 9, &[1])];
        assert_eq!(select_car(&cars, &req(5, 9)), None);
    }

    #[test]
    fn empty_fleet_returns_none() {
        assert_eq!(select_car(&[], &req(2, 5)), None);
    }
}
