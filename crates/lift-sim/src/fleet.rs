//! The `Fleet` struct and its tick loop.

use lift_car::{Car, CarState, CarView};
use lift_core::{BankClock, FleetConfig, Floor, Tick};
use lift_dispatch::{select_car, Assignment, DispatchError, PickupRequest};

use crate::{FleetObserver, NoopObserver};

/// A bank of elevator cars driven by one logical clock.
///
/// The fleet is the single owner of all car state, and its two mutation
/// paths touch disjoint field classes: [`request_pickup`][Fleet::request_pickup]
/// writes only destination queues, the tick loop writes only motion and
/// door fields.  Both take `&mut self`, so a request can never observe a
/// half-finished tick — the borrow checker enforces the atomicity the
/// design asks for.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].
pub struct Fleet {
    config: FleetConfig,
    clock: BankClock,
    /// Cars indexed by `CarId`, ascending — the tick loop and the
    /// dispatcher both rely on this order for determinism.
    cars: Vec<Car>,
}

impl Fleet {
    pub(crate) fn from_parts(config: FleetConfig, cars: Vec<Car>) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            cars,
        }
    }

    // ── Read-only surface ─────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Read-only access to the live cars (no mutation path).
    #[inline]
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// An immutable copy of every car's observable state, in `CarId` order.
    pub fn snapshot(&self) -> Vec<CarView> {
        self.cars.iter().map(Car::view).collect()
    }

    // ── Dispatch surface ──────────────────────────────────────────────────

    /// Request a pickup at `from` travelling to `to`.
    ///
    /// Validates the pair, selects the best car (nearest eligible, ties to
    /// the lowest id), and enqueues the pickup stop before the drop-off
    /// stop.  A rejected request — invalid pair or no eligible car — leaves
    /// every car untouched; there is no queue and no retry.
    pub fn request_pickup(
        &mut self,
        from: Floor,
        to: Floor,
    ) -> Result<Assignment, DispatchError> {
        let request = PickupRequest::new(from, to, self.config.num_floors)?;

        let views = self.snapshot();
        let Some(id) = select_car(&views, &request) else {
            log::warn!(
                "{}: no car available for pickup {from} -> {to}",
                self.clock.current_tick
            );
            return Err(DispatchError::NoCarAvailable { from, to });
        };

        // Both floors were validated above, so neither enqueue can fail and
        // the pickup/drop-off pair cannot partially apply.
        let car = &mut self.cars[id.index()];
        car.enqueue_stop(from)?;
        car.enqueue_stop(to)?;
        log::info!(
            "{}: {id} (at {}) assigned pickup {from} -> {to}, queue {:?}",
            self.clock.current_tick,
            car.floor(),
            car.destinations()
        );
        Ok(Assignment { car: id, from, to })
    }

    // ── Clock surface ─────────────────────────────────────────────────────

    /// Advance simulated time by one tick without callbacks.
    pub fn tick(&mut self) {
        self.tick_with(&mut NoopObserver);
    }

    /// Advance simulated time by one tick, reporting events to `observer`.
    ///
    /// Per tick, in ascending `CarId` order:
    ///
    /// 1. **Door phase** — every open door's countdown is decremented;
    ///    doors reaching zero close and the car recomputes its direction.
    /// 2. **Motion phase** — every car whose doors are closed steps one
    ///    floor toward its next stop; arrivals open their doors.
    ///
    /// Doors always expire before any motion, so a car whose doors close
    /// this tick moves this tick — in that order, never ambiguously.  The
    /// tick performs no request logic; it is pure state advancement.
    pub fn tick_with<O: FleetObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Door phase ────────────────────────────────────────────────────
        for car in &mut self.cars {
            if let Some(floor) = car.door_tick() {
                log::debug!("{now}: {} doors closing at {floor}", car.id());
                observer.on_door_closed(now, car.id(), floor);
            }
        }

        // ── Motion phase ──────────────────────────────────────────────────
        let mut moved = 0;
        for car in &mut self.cars {
            if car.state().is_door_open() {
                continue;
            }
            let before = car.floor();
            if let Some(floor) = car.step() {
                log::debug!("{now}: {} doors opening at {floor}", car.id());
                observer.on_door_open(now, car.id(), floor);
            }
            if car.floor() != before {
                moved += 1;
            }
        }

        observer.on_tick_end(now, moved);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.snapshot());
        }

        self.clock.advance();
    }

    /// Advance exactly `n` ticks, reporting events to `observer`.
    pub fn run_ticks<O: FleetObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// `true` when every car is idle with an empty queue.
    pub fn is_settled(&self) -> bool {
        self.cars
            .iter()
            .map(|car| car.state())
            .all(|state| state == CarState::Idle)
    }
}
