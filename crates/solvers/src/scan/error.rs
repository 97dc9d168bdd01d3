use rootscan_core::IntervalError;
use thiserror::Error;

/// Errors that can occur when scanning a range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Bounds are non-finite or not strictly increasing.
    #[error("invalid range [{low}, {high}]: bounds must be finite with low < high")]
    InvalidRange { low: f64, high: f64 },

    /// A bound is so large that a unit step no longer advances the grid.
    #[error("unit steps cannot advance across [{low}, {high}]: bounds must lie within ±2^53")]
    StepTooSmall { low: f64, high: f64 },

    /// A candidate interval could not be formed from the step grid.
    #[error("invalid candidate: {0}")]
    Candidate(#[from] IntervalError),
}
