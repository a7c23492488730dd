//! Error types for lift-dispatch.

use lift_car::CarError;
use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Malformed pickup/drop-off pair.  Caller error, never retried.
    #[error("invalid pickup request {from} -> {to}: {reason}")]
    InvalidRequest {
        from: Floor,
        to: Floor,
        reason: &'static str,
    },

    /// Transient capacity condition: every car would need a reversal.  The
    /// caller decides whether to retry later; nothing is queued here.
    #[error("no car can serve pickup {from} -> {to} without reversing")]
    NoCarAvailable { from: Floor, to: Floor },

    /// A stop insertion failing after validation.  Unreachable when both
    /// floors were validated first.
    #[error(transparent)]
    Car(#[from] CarError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
