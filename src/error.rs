//! Setup errors. Nothing can fail once a run has started.

use thiserror::Error;

/// Errors reported before a run mutates anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimpixError {
    /// Target and working buffers differ in length, or are empty.
    #[error("dimension mismatch: target has {target} pixels, working has {working}")]
    DimensionMismatch { target: usize, working: usize },

    /// Initial temperature is not a positive finite number.
    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    /// Any other out-of-range annealing parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimpixError>;
