//! `lift-core` — foundational types for the liftbank elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It
//! intentionally has no `lift-*` dependencies and minimal external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                  |
//! |---------------|-------------------------------------------|
//! | [`ids`]       | `CarId`                                   |
//! | [`floor`]     | `Floor` (1-based floor numbers)           |
//! | [`direction`] | `Heading`, `Direction`                    |
//! | [`time`]      | `Tick`, `BankClock`                       |
//! | [`config`]    | `FleetConfig`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod floor;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use direction::{Direction, Heading};
pub use floor::Floor;
pub use ids::CarId;
pub use time::{BankClock, Tick};
