//! Deterministic car selection.
//!
//! Pure functions over immutable [`CarView`]s — no scheduler, no mutation —
//! so the dispatch rule is unit-testable in isolation and its outcome
//! depends only on the snapshot it is given.

use lift_car::CarView;
use lift_core::{CarId, Heading};

use crate::PickupRequest;

/// Can this car serve the request without reversing?
///
/// A car with no pending stops is always eligible (it is idle, or closing
/// an empty-queue door stop and about to go idle).  A busy car is eligible
/// only when the pickup lies strictly beyond its current floor — it is
/// already departing that one — up to and including its next stop, in its
/// travel direction, and the drop-off continues the same way.  No reversal
/// is ever forced onto a busy car.
pub fn is_eligible(view: &CarView, request: &PickupRequest) -> bool {
    let head = match view.next_stop() {
        None => return true,
        Some(head) => head,
    };
    // The direction the car travels (or will resume) toward its next stop.
    match Heading::toward(view.floor, head) {
        Some(Heading::Up) => {
            view.floor < request.from && request.from <= head && request.to > request.from
        }
        Some(Heading::Down) => {
            head <= request.from && request.from < view.floor && request.to < request.from
        }
        // Next stop is the current floor: mid-arrival, not dispatchable.
        None => false,
    }
}

/// Pick the best car for `request`: the eligible car minimizing
/// `|floor − from|`, ties broken by the lowest [`CarId`].
///
/// The (distance, id) key makes the choice deterministic regardless of the
/// order cars appear in the slice.  Returns `None` when no car is eligible
/// — the request is rejected, not queued.
pub fn select_car(cars: &[CarView], request: &PickupRequest) -> Option<CarId> {
    cars.iter()
        .filter(|view| is_eligible(view, request))
        .map(|view| (view.floor.distance(request.from), view.id))
        .min()
        .map(|(_, id)| id)
}
