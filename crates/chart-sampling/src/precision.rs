// File: crates/chart-sampling/src/precision.rs
// Summary: Display precision derived from an interval's magnitude, plus fixed-point formatting.

use crate::error::SamplingError;
use crate::point::Bound;

/// Digits shown for a unit-width interval.
pub const PRECISION_CALIBRATION: i32 = 4;

/// Number of decimal digits suited to values spread over `[start, end]`.
///
/// Computed as `4 - round(log10(end - start))`, rounding half away from zero.
/// Wide intervals give negative precisions (round to tens, hundreds, ...).
pub fn compute_precision(start: f64, end: f64) -> Result<i32, SamplingError> {
    let range = end - start;
    if !range.is_finite() || range <= 0.0 {
        return Err(SamplingError::InvalidRange { start, end });
    }
    let digit_index = range.log10().round() as i32;
    Ok(PRECISION_CALIBRATION - digit_index)
}

pub fn compute_precision_for(bound: &Bound) -> Result<i32, SamplingError> {
    compute_precision(bound.min, bound.max)
}

/// Format `value` with `digits` fractional digits.
///
/// Ties round half away from zero, whatever the sign of `digits`. Negative
/// `digits` round to the nearest `10^-digits` and print no fraction.
pub fn format_fixed(value: f64, digits: i32) -> String {
    let places = digits.max(0) as usize;
    let rounded = round_to_digits(value, digits);
    // avoid printing "-0" / "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", places, rounded)
}

fn round_to_digits(value: f64, digits: i32) -> f64 {
    if digits >= 0 {
        let scale = 10f64.powi(digits);
        let scaled = value * scale;
        // beyond f64 resolution there is nothing left to round
        if !scaled.is_finite() || scaled.abs() >= 1e15 {
            return value;
        }
        scaled.round() / scale
    } else {
        let scale = 10f64.powi(-digits);
        (value / scale).round() * scale
    }
}
