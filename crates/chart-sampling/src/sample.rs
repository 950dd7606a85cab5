// File: crates/chart-sampling/src/sample.rs
// Summary: Evenly spaced sampling of a scalar function over a closed interval.

use crate::error::SamplingError;
use crate::point::Point;

/// Number of steps the interval is split into when no usable step is given.
pub const DEFAULT_SAMPLE_COUNT: u32 = 100;

const MAX_PREALLOCATED: usize = 1 << 20;

/// Sample `func` from `start` to `end` (inclusive) every `step`.
///
/// A missing or non-finite `step` defaults to `(end - start) / 100`. The right
/// endpoint is always the last sample, appended after the stepping loop when
/// accumulated rounding leaves the final `x` short of `end`.
pub fn sample_func<F>(mut func: F, start: f64, end: f64, step: Option<f64>) -> Result<Vec<Point>, SamplingError>
where
    F: FnMut(f64) -> f64,
{
    try_sample_func(|x| Ok::<_, SamplingError>(func(x)), start, end, step)
}

/// Fallible form of [`sample_func`]. The first error returned by `func` is
/// handed back unchanged and no partial samples are kept.
pub fn try_sample_func<F, E>(mut func: F, start: f64, end: f64, step: Option<f64>) -> Result<Vec<Point>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SamplingError>,
{
    // the width must be finite too, or no step or precision can be derived
    if !start.is_finite() || !end.is_finite() || start >= end || !(end - start).is_finite() {
        return Err(SamplingError::InvalidInterval { start, end }.into());
    }
    let step = match step {
        Some(s) if s.is_finite() => s,
        _ => (end - start) / DEFAULT_SAMPLE_COUNT as f64,
    };
    if step <= 0.0 {
        return Err(SamplingError::InvalidStep { step }.into());
    }

    let expected = (((end - start) / step).ceil() as usize).saturating_add(1);
    let mut xy = Vec::with_capacity(expected.min(MAX_PREALLOCATED));
    let mut x = start;
    while x < end {
        xy.push(Point::new(x, func(x)?));
        let next = x + step;
        if next <= x {
            // step vanished against the magnitude of x
            return Err(SamplingError::InvalidStep { step }.into());
        }
        x = next;
    }

    // start < end guarantees at least one sample above
    if xy.last().map_or(true, |p| p.x < end) {
        xy.push(Point::new(end, func(end)?));
    }
    Ok(xy)
}
