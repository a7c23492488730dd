//! Fluent builder for constructing a [`Fleet`].

use lift_car::Car;
use lift_core::{CarId, FleetConfig};

use crate::{Fleet, SimError, SimResult};

/// Fluent builder for [`Fleet`].
///
/// # Example
///
/// ```rust,ignore
/// let mut fleet = FleetBuilder::new(2, 10)
///     .door_open_secs(2)
///     .build()?;
/// let assignment = fleet.request_pickup(Floor(1), Floor(5))?;
/// fleet.run_ticks(10, &mut NoopObserver);
/// ```
pub struct FleetBuilder {
    config: FleetConfig,
}

impl FleetBuilder {
    /// Start from the default timing configuration (1 s ticks, 2 s doors).
    pub fn new(num_cars: u32, num_floors: u8) -> Self {
        Self {
            config: FleetConfig::new(num_cars, num_floors),
        }
    }

    /// Start from a fully specified configuration.
    pub fn from_config(config: FleetConfig) -> Self {
        Self { config }
    }

    /// How long doors stay open at each stop, in simulated seconds.
    pub fn door_open_secs(mut self, secs: u32) -> Self {
        self.config.door_open_secs = secs;
        self
    }

    /// Simulated seconds per tick.
    pub fn tick_duration_secs(mut self, secs: u32) -> Self {
        self.config.tick_duration_secs = secs;
        self
    }

    /// Call the observer's snapshot hook every `n` ticks (0 disables it).
    pub fn snapshot_interval_ticks(mut self, n: u64) -> Self {
        self.config.snapshot_interval_ticks = n;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Fleet`] with
    /// every car parked at the ground floor.
    pub fn build(self) -> SimResult<Fleet> {
        let config = self.config;
        if config.num_cars < 1 {
            return Err(SimError::Config("a fleet needs at least one car".into()));
        }
        if config.num_floors < 2 {
            return Err(SimError::Config(format!(
                "a building needs at least two floors, got {}",
                config.num_floors
            )));
        }
        if config.tick_duration_secs == 0 {
            return Err(SimError::Config("tick duration must be positive".into()));
        }
        if config.door_open_secs == 0 {
            return Err(SimError::Config("door-open duration must be positive".into()));
        }

        let door_ticks = config.door_open_ticks();
        let cars = (0..config.num_cars)
            .map(|i| Car::new(CarId(i), config.num_floors, door_ticks))
            .collect();
        Ok(Fleet::from_parts(config, cars))
    }
}
