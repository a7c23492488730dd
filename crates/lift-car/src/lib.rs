//! `lift-car` — the single-car state machine for the liftbank simulator.
//!
//! A [`Car`] is a three-state machine:
//!
//! ```text
//! Idle ──enqueue_stop──▶ Moving(heading) ──reach head──▶ DoorOpen
//!   ▲                        ▲                              │
//!   └───── queue empty ──────┴───── queue non-empty ────────┘
//!                        (door timer expires)
//! ```
//!
//! Two rules distinguish it from the naive rendition:
//!
//! - **Doors gate motion.**  While in `DoorOpen`, [`Car::step`] is a no-op.
//!   Direction is recomputed only when the door timer expires — never on
//!   arrival — so a car cannot close its doors and move in the same breath.
//! - **Directional destination ordering.**  New stops are inserted with a
//!   sort key parameterized by the current heading: floors still ahead come
//!   first in travel order, floors behind queue for the return pass.  No
//!   always-ascending sort, no spurious reversals.

pub mod car;
pub mod error;
pub mod state;
pub mod view;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::Car;
pub use error::{CarError, CarResult};
pub use state::{CarState, DoorState};
pub use view::CarView;
