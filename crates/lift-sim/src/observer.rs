//! Fleet observer trait for progress reporting and data collection.

use lift_car::CarView;
use lift_core::{CarId, Floor, Tick};

/// Callbacks invoked by [`Fleet::tick_with`][crate::Fleet::tick_with] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — door event printer
///
/// ```rust,ignore
/// struct DoorPrinter;
///
/// impl FleetObserver for DoorPrinter {
///     fn on_door_open(&mut self, tick: Tick, car: CarId, floor: Floor) {
///         println!("{tick}: {car} doors opening at {floor}");
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a car arrives at a stop and its doors open.
    fn on_door_open(&mut self, _tick: Tick, _car: CarId, _floor: Floor) {}

    /// Called when a car's door timer expires and its doors close.
    fn on_door_closed(&mut self, _tick: Tick, _car: CarId, _floor: Floor) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of cars that changed floor this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called at snapshot intervals (every
    /// `config.snapshot_interval_ticks` ticks) with immutable car views, so
    /// output writers can record fleet state without reaching into live
    /// cars.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &[CarView]) {}
}

/// A [`FleetObserver`] that does nothing.  Used by [`Fleet::tick`][crate::Fleet::tick]
/// when no callbacks are wanted.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
