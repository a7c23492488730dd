//! Validated pickup requests and their assignments.

use lift_core::{CarId, Floor, Heading};

use crate::{DispatchError, DispatchResult};

/// A validated pickup/drop-off pair.
///
/// Ephemeral by design: it exists only long enough to pick a car and
/// translate into two stops.  Nothing retains it after assignment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupRequest {
    pub from: Floor,
    pub to: Floor,
}

impl PickupRequest {
    /// Validate a pickup/drop-off pair against the building's floor range.
    ///
    /// Fails with [`DispatchError::InvalidRequest`] if the floors coincide
    /// or either lies out of bounds — caller error, never retried.
    pub fn new(from: Floor, to: Floor, num_floors: u8) -> DispatchResult<Self> {
        if !from.in_bounds(num_floors) || !to.in_bounds(num_floors) {
            return Err(DispatchError::InvalidRequest {
                from,
                to,
                reason: "floor outside the served range",
            });
        }
        if from == to {
            return Err(DispatchError::InvalidRequest {
                from,
                to,
                reason: "pickup and drop-off floors coincide",
            });
        }
        Ok(Self { from, to })
    }

    /// The direction the passenger wants to travel.
    #[inline]
    pub fn heading(&self) -> Heading {
        // from != to is guaranteed by construction.
        if self.to > self.from {
            Heading::Up
        } else {
            Heading::Down
        }
    }
}

/// The outcome of a successful dispatch: which car will serve the request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub car: CarId,
    pub from: Floor,
    pub to: Floor,
}
