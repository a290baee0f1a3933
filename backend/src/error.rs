//! Error type for the random source
//!
//! Every failure is a broken precondition on the caller's side (bad
//! probability, bad weights, bounds a normal draw cannot satisfy). They are
//! returned as values in all build profiles.

use thiserror::Error;

/// Invariant violations raised by sampling, configuration and the shared handle
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("Probability must be within [0, 1], got {probability}")]
    InvalidProbability { probability: f32 },

    #[error("Standard deviation must be finite and non-negative, got {stddev}")]
    InvalidStdDev { stddev: f32 },

    #[error("Normal draw stayed outside [{min}, {max}] for {attempts} attempts")]
    RejectionBudgetExhausted { attempts: u32, min: f32, max: f32 },

    #[error("Weight list is empty")]
    EmptyWeights,

    #[error("All weights are zero")]
    AllWeightsZero,

    #[error("Weight at index {index} must be finite and non-negative, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Sum of weights is not finite")]
    WeightTotalOverflow,

    #[error("No shared random source installed on this thread")]
    SharedNotInstalled,

    #[error("Shared random source is already borrowed")]
    SharedBusy,

    #[error("Invalid sampling config: {0}")]
    InvalidConfig(String),
}
