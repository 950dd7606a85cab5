// File: crates/chart-sampling/src/error.rs
// Summary: Error taxonomy for sampling, combining, range and precision helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// Interval bounds must be finite with `start < end`.
    #[error("invalid interval [{start}, {end}]: start must be finite and strictly below end")]
    InvalidInterval { start: f64, end: f64 },

    #[error("invalid step {step}: must be positive and large enough to advance x")]
    InvalidStep { step: f64 },

    /// Second operand of a pairwise combination is shorter than the first.
    #[error("length mismatch: left has {left} elements, right has only {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("cannot compute a range over an empty sample set")]
    EmptyInput,

    #[error("sample {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch { index: usize, expected: usize, found: usize },

    /// Precision needs a finite, strictly positive width.
    #[error("invalid range [{start}, {end}]: end must be strictly above start")]
    InvalidRange { start: f64, end: f64 },
}
