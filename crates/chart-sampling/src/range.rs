// File: crates/chart-sampling/src/range.rs
// Summary: Per-dimension [min, max] reduction over N-dimensional samples.

use crate::combine::binary_map;
use crate::error::SamplingError;
use crate::point::{Bound, Point};

/// Compute one `Bound` per dimension over `samples`, in dimension order.
///
/// Every sample must have the dimension of the first one.
pub fn compute_range<P>(samples: &[P]) -> Result<Vec<Bound>, SamplingError>
where
    P: AsRef<[f64]>,
{
    let first = samples.first().ok_or(SamplingError::EmptyInput)?.as_ref();
    let dims = first.len();

    // Owned copies: the accumulators must never alias the first sample.
    let mut lower = first.to_vec();
    let mut upper = first.to_vec();
    for (index, sample) in samples.iter().enumerate() {
        let sample = sample.as_ref();
        if sample.len() != dims {
            return Err(SamplingError::DimensionMismatch { index, expected: dims, found: sample.len() });
        }
        lower = binary_map(f64::min, &lower, sample)?;
        upper = binary_map(f64::max, &upper, sample)?;
    }

    binary_map(Bound::new, &lower, &upper)
}

/// `compute_range` specialised to XY samples: returns `[x_bound, y_bound]`.
pub fn compute_point_range(samples: &[Point]) -> Result<[Bound; 2], SamplingError> {
    let coords: Vec<[f64; 2]> = samples.iter().map(|p| p.to_array()).collect();
    let bounds = compute_range(&coords)?;
    Ok([bounds[0], bounds[1]])
}
