//! The single-car state machine.

use lift_core::{CarId, Direction, Floor, Heading};

use crate::{CarError, CarResult, CarState, CarView, DoorState};

/// One elevator car: position, operating state, and ordered destination
/// queue.
///
/// A car mutates through exactly two paths: the dispatcher enqueues stops
/// (`enqueue_stop`) and the scheduler advances time (`door_tick`, `step`).
/// These touch disjoint concerns — the queue versus motion/door fields — so
/// the tick loop never races a request even when both are driven from the
/// same `&mut Fleet`.
#[derive(Clone, Debug)]
pub struct Car {
    id: CarId,
    num_floors: u8,
    floor: Floor,
    state: CarState,
    /// Pending stops, ordered by the current travel policy: floors still
    /// ahead in the travel direction first (in travel order), then floors
    /// requiring a reversal (in reverse travel order).
    destinations: Vec<Floor>,
    /// Door-open duration in ticks, fixed at fleet construction.
    door_open_ticks: u32,
}

impl Car {
    /// Create a car parked at the ground floor with no destinations.
    pub fn new(id: CarId, num_floors: u8, door_open_ticks: u32) -> Self {
        Self {
            id,
            num_floors,
            floor: Floor::GROUND,
            state: CarState::Idle,
            destinations: Vec::new(),
            door_open_ticks,
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> CarState {
        self.state
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    #[inline]
    pub fn door(&self) -> DoorState {
        self.state.door()
    }

    /// Pending stops in service order.
    #[inline]
    pub fn destinations(&self) -> &[Floor] {
        &self.destinations
    }

    /// An immutable copy of the observable state.
    pub fn view(&self) -> CarView {
        CarView {
            id: self.id,
            floor: self.floor,
            direction: self.direction(),
            door: self.door(),
            destinations: self.destinations.clone(),
        }
    }

    // ── Dispatcher-facing mutation ────────────────────────────────────────

    /// Add `floor` to the destination queue.
    ///
    /// Idempotent: a floor already queued is left where it is.  Enqueueing
    /// the car's own floor opens the doors immediately when the car is
    /// idle, is already satisfied when the doors are open, and queues for
    /// the return pass when the car is departing.  Out-of-bounds floors
    /// fail with [`CarError::OutOfRange`] and leave all state untouched.
    pub fn enqueue_stop(&mut self, floor: Floor) -> CarResult<()> {
        if !floor.in_bounds(self.num_floors) {
            return Err(CarError::OutOfRange {
                floor,
                num_floors: self.num_floors,
            });
        }
        if self.destinations.contains(&floor) {
            return Ok(());
        }

        match self.state {
            CarState::Idle => {
                match Heading::toward(self.floor, floor) {
                    // The first stop sets the travel direction.
                    Some(heading) => {
                        self.destinations.push(floor);
                        self.state = CarState::Moving(heading);
                    }
                    // Already at the requested floor: cycle the doors for
                    // boarding instead of queueing a zero-length trip.
                    None => self.open_doors(),
                }
            }
            CarState::Moving(heading) => {
                // A stop at the departure floor itself is unservable on
                // this pass (doors are closed, the car is leaving); the
                // sort key files it with the reversal segment for the
                // return pass.
                self.insert_destination(floor, heading);
            }
            CarState::DoorOpen { .. } => {
                // A stop at the boarding floor is being served right now.
                // Other stops sort against the heading the car will resume
                // with when the doors close; the open duration is never
                // shortened or extended.
                if floor != self.floor {
                    match self.resume_heading() {
                        Some(heading) => self.insert_destination(floor, heading),
                        None => {
                            // Empty queue: this stop decides the direction.
                            self.destinations.push(floor);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    // ── Scheduler-facing mutation ─────────────────────────────────────────

    /// Count down an open door by one tick (the scheduler's door phase).
    ///
    /// Returns the floor at which the doors closed this tick, or `None` if
    /// they stayed open or were not open at all.  Closing recomputes the
    /// travel direction from the (possibly now non-empty) queue.
    pub fn door_tick(&mut self) -> Option<Floor> {
        if let CarState::DoorOpen { remaining_ticks } = &mut self.state {
            *remaining_ticks -= 1;
            if *remaining_ticks == 0 {
                self.close_doors();
                return Some(self.floor);
            }
        }
        None
    }

    /// Advance one floor toward the head of the queue (the scheduler's
    /// motion phase).
    ///
    /// A no-op while idle, and — the central invariant — while the doors
    /// are open: motion is gated by door state, so an arrival never bleeds
    /// into movement before the door timer has expired.
    ///
    /// Returns the floor reached this tick if the car arrived at its next
    /// stop (doors are now open there).
    pub fn step(&mut self) -> Option<Floor> {
        let heading = match self.state {
            CarState::Moving(h) => h,
            CarState::Idle | CarState::DoorOpen { .. } => return None,
        };
        let head = match self.destinations.first().copied() {
            Some(f) => f,
            None => {
                // Unreachable if the Moving ⇒ non-empty-queue invariant
                // holds; recover to Idle rather than walking off the shaft.
                self.state = CarState::Idle;
                return None;
            }
        };

        self.floor = self.floor.step_toward(heading);
        if self.floor == head {
            self.destinations.remove(0);
            self.open_doors();
            return Some(self.floor);
        }
        None
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn open_doors(&mut self) {
        self.state = CarState::DoorOpen {
            remaining_ticks: self.door_open_ticks,
        };
    }

    fn close_doors(&mut self) {
        self.state = match self.destinations.first().copied() {
            None => CarState::Idle,
            Some(head) => match Heading::toward(self.floor, head) {
                Some(heading) => CarState::Moving(heading),
                // Head equals the current floor — cannot normally happen,
                // but serving it in place is the safe recovery.
                None => {
                    self.destinations.remove(0);
                    CarState::DoorOpen {
                        remaining_ticks: self.door_open_ticks,
                    }
                }
            },
        };
    }

    /// The heading the car will resume with when its doors close, derived
    /// from the head of the queue.  `None` if the queue is empty.
    fn resume_heading(&self) -> Option<Heading> {
        self.destinations
            .first()
            .and_then(|&head| Heading::toward(self.floor, head))
    }

    /// Insert `floor` preserving directional continuity relative to
    /// `heading` at the car's current position.
    fn insert_destination(&mut self, floor: Floor, heading: Heading) {
        let key = travel_key(self.floor, floor, heading);
        let at = self
            .destinations
            .iter()
            .position(|&d| travel_key(self.floor, d, heading) > key)
            .unwrap_or(self.destinations.len());
        self.destinations.insert(at, floor);
    }
}

#[cfg(test)]
impl Car {
    /// Test-only: a car parked idle at an arbitrary floor.
    pub(crate) fn parked_at(floor: Floor, num_floors: u8, door_open_ticks: u32) -> Self {
        Self {
            id: CarId(0),
            num_floors,
            floor,
            state: CarState::Idle,
            destinations: Vec::new(),
            door_open_ticks,
        }
    }
}

/// Sort key for the destination queue, parameterized by the current travel
/// direction.
///
/// Floors still ahead of `current` in the travel direction rank first, in
/// travel order; floors behind rank after, in reverse travel order (they
/// are served on the return pass).  This is what replaces a naive
/// always-ascending sort, which would force spurious reversals whenever a
/// queued floor lies behind the car.
pub(crate) fn travel_key(current: Floor, dest: Floor, heading: Heading) -> (u8, u8) {
    match heading {
        Heading::Up => {
            if dest > current {
                (0, dest.0)
            } else {
                (1, u8::MAX - dest.0)
            }
        }
        Heading::Down => {
            if dest < current {
                (0, u8::MAX - dest.0)
            } else {
                (1, dest.0)
            }
        }
    }
}
