//! Floor numbering.
//!
//! Floors are 1-based: the ground floor is `Floor(1)` and a building with
//! `num_floors` floors spans `[1, num_floors]`.  A `u8` caps buildings at
//! 255 floors, comfortably above anything real.

use std::fmt;

use crate::Heading;

/// A 1-based floor number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// The ground floor — every car starts here.
    pub const GROUND: Floor = Floor(1);

    /// `true` if this floor lies within a building of `num_floors` floors.
    #[inline]
    pub fn in_bounds(self, num_floors: u8) -> bool {
        (1..=num_floors).contains(&self.0)
    }

    /// Absolute distance to `other`, in floors.
    #[inline]
    pub fn distance(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor in the given travel direction.
    ///
    /// Callers guarantee the move stays in bounds (a moving car always has a
    /// destination beyond the current floor in its travel direction).
    #[inline]
    pub fn step_toward(self, heading: Heading) -> Floor {
        match heading {
            Heading::Up => Floor(self.0 + 1),
            Heading::Down => Floor(self.0 - 1),
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
