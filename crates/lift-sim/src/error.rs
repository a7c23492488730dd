//! Error types for lift-sim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
