//! `lift-sim` — tick loop orchestrator for the liftbank elevator simulator.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Doors   — decrement every open door's countdown (ascending CarId);
//!               doors hitting zero close and recompute direction.
//!   ② Motion  — step() every car whose doors are closed; a car reaching
//!               the head of its queue opens its doors and starts the
//!               door countdown.
//! ```
//!
//! Door expiry always precedes motion within a tick, so "close then move"
//! happens in exactly that order and a car never moves with open doors.
//! Requests enter between ticks through [`Fleet::request_pickup`]; the tick
//! itself performs no request logic.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::Floor;
//! use lift_sim::{FleetBuilder, NoopObserver};
//!
//! let mut fleet = FleetBuilder::new(2, 10).build()?;
//! fleet.request_pickup(Floor(1), Floor(5))?;
//! fleet.run_ticks(10, &mut NoopObserver);
//! println!("{:?}", fleet.snapshot());
//! ```

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::FleetBuilder;
pub use error::{SimError, SimResult};
pub use fleet::Fleet;
pub use observer::{FleetObserver, NoopObserver};
