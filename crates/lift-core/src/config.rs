//! Fleet configuration.

use crate::{BankClock, Tick};

/// Top-level fleet configuration, fixed for the fleet's lifetime.
///
/// Typically constructed through `lift-sim`'s `FleetBuilder`, which
/// validates it; the struct itself stays a plain bag of documented fields
/// so applications can also load it from a TOML/JSON file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Number of cars in the bank.  Must be ≥ 1.
    pub num_cars: u32,

    /// Number of floors served, numbered `1..=num_floors`.  Must be ≥ 2.
    pub num_floors: u8,

    /// Simulated seconds per tick.  A car travels one floor per tick.
    /// Default: 1.
    pub tick_duration_secs: u32,

    /// How long doors stay open at a stop, in simulated seconds.
    /// Default: 2 (two ticks at the default resolution).
    pub door_open_secs: u32,

    /// Call the observer's snapshot hook every N ticks.  0 disables
    /// snapshot callbacks entirely.
    pub snapshot_interval_ticks: u64,
}

impl FleetConfig {
    /// A configuration with the default timing values.
    pub fn new(num_cars: u32, num_floors: u8) -> Self {
        Self {
            num_cars,
            num_floors,
            tick_duration_secs: 1,
            door_open_secs: 2,
            snapshot_interval_ticks: 1,
        }
    }

    /// Door-open duration expressed in ticks, rounded up so doors never
    /// close before the configured duration has elapsed.
    #[inline]
    pub fn door_open_ticks(&self) -> u32 {
        self.door_open_secs.div_ceil(self.tick_duration_secs).max(1)
    }

    /// Construct a `BankClock` pre-configured for this fleet.
    pub fn make_clock(&self) -> BankClock {
        BankClock::new(self.tick_duration_secs)
    }

    /// `true` if `tick` is a snapshot boundary.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}
