//! Read-only car snapshot.

use lift_core::{CarId, Direction, Floor};

use crate::DoorState;

/// An immutable copy of one car's observable state.
///
/// Returned by the fleet's status surface; holding or mutating a `CarView`
/// has no effect on the live car.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarView {
    pub id: CarId,
    pub floor: Floor,
    pub direction: Direction,
    pub door: DoorState,
    /// Pending stops in service order.
    pub destinations: Vec<Floor>,
}

impl CarView {
    /// The next floor the car will stop at, if any.
    #[inline]
    pub fn next_stop(&self) -> Option<Floor> {
        self.destinations.first().copied()
    }
}
