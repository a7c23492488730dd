//! Travel direction types.
//!
//! Two types on purpose: a moving car always has a concrete [`Heading`]
//! (up or down), while a snapshot reports a [`Direction`] that may be
//! `Idle`.  Keeping them separate means no code path has to handle a
//! "moving but idle" combination.

use std::fmt;

use crate::Floor;

// ── Heading ───────────────────────────────────────────────────────────────────

/// The travel direction of a car that is actually going somewhere.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// The direction of travel from `from` to `to`, or `None` if they are
    /// the same floor.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Option<Heading> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Heading::Up),
            std::cmp::Ordering::Less => Some(Heading::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Up => write!(f, "up"),
            Heading::Down => write!(f, "down"),
        }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction as reported by status snapshots: a car with no travel underway
/// (no destinations, or stopped with its doors open) reports `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl From<Heading> for Direction {
    #[inline]
    fn from(h: Heading) -> Direction {
        match h {
            Heading::Up => Direction::Up,
            Heading::Down => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}
