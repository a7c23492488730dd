//! Plain data row types written by output backends.

use lift_core::Direction;

/// A snapshot of one car's observable state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id:        u32,
    pub tick:          u64,
    /// 1-based floor number.
    pub floor:         u8,
    /// `"up"`, `"down"`, or `"idle"` (see [`direction_label`]).
    pub direction:     &'static str,
    pub door_open:     bool,
    /// Number of stops still queued, including the one being travelled to.
    pub pending_stops: u32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: u64,
    /// Cars that changed floor during this tick.
    pub moved_cars:   u64,
}

/// Stable column value for a travel direction.
pub fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Idle => "idle",
    }
}
