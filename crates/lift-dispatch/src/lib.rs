//! `lift-dispatch` — request validation and car selection for the liftbank
//! simulator.
//!
//! The dispatch rule, evaluated over immutable car snapshots:
//!
//! 1. A car with no pending stops is eligible.
//! 2. A busy car is eligible iff the pickup lies en route — strictly beyond
//!    its current floor, up to and including its next stop, in its travel
//!    direction — and the drop-off continues the same direction.
//! 3. Among eligible cars, minimal `|floor − from|`; ties break to the
//!    lowest `CarId`.
//! 4. No eligible car → [`DispatchError::NoCarAvailable`].  There is no
//!    retry queue; the caller is told and decides.

pub mod error;
pub mod request;
pub mod select;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DispatchError, DispatchResult};
pub use request::{Assignment, PickupRequest};
pub use select::{is_eligible, select_car};
