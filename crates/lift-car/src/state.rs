//! The car's operating state.

use lift_core::{Direction, Heading};

// ── CarState ──────────────────────────────────────────────────────────────────

/// The operating state of a single car.
///
/// A tagged enum rather than a pair of `is_moving`/`door_open` booleans: the
/// invalid combinations (moving with doors open, idle with a door timer)
/// are unrepresentable, and the door countdown lives inside the only state
/// that needs it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarState {
    /// No destinations, doors closed.
    #[default]
    Idle,

    /// Doors closed, advancing one floor per tick toward the head of the
    /// destination queue.
    Moving(Heading),

    /// Stationary with doors open.  Motion is suppressed until
    /// `remaining_ticks` counts down to zero in the scheduler's door phase.
    DoorOpen { remaining_ticks: u32 },
}

impl CarState {
    /// `true` while the doors are open (motion is gated on this).
    #[inline]
    pub fn is_door_open(self) -> bool {
        matches!(self, CarState::DoorOpen { .. })
    }

    /// Direction as reported by snapshots: `Idle` unless actually moving.
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            CarState::Moving(h) => h.into(),
            CarState::Idle | CarState::DoorOpen { .. } => Direction::Idle,
        }
    }

    /// Door position as reported by snapshots.
    #[inline]
    pub fn door(self) -> DoorState {
        if self.is_door_open() {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }
}

// ── DoorState ─────────────────────────────────────────────────────────────────

/// Door position as exposed by the status surface.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl std::fmt::Display for DoorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorState::Closed => write!(f, "closed"),
            DoorState::Open => write!(f, "open"),
        }
    }
}
