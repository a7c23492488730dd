//! Error types for lift-car.

use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarError {
    #[error("floor {floor} is outside the served range [F1, F{num_floors}]")]
    OutOfRange { floor: Floor, num_floors: u8 },
}

pub type CarResult<T> = Result<T, CarError>;
