// File: crates/chart-sampling/src/lib.rs
// Summary: Numeric library entry point; exports sampling, range and precision helpers.

pub mod error;
pub mod point;
pub mod sample;
pub mod combine;
pub mod range;
pub mod precision;

pub use error::SamplingError;
pub use point::{Bound, Point};
pub use sample::{sample_func, try_sample_func, DEFAULT_SAMPLE_COUNT};
pub use combine::binary_map;
pub use range::{compute_point_range, compute_range};
pub use precision::{compute_precision, compute_precision_for, format_fixed, PRECISION_CALIBRATION};
