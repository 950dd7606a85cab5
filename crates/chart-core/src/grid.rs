// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use chart_sampling::{compute_precision, format_fixed};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick labels use two digits fewer than a tooltip over the same range.
const TICK_DIGIT_DROP: i32 = 2;

/// Format tick values for an axis spanning `[min, max]`.
pub fn tick_labels(min: f64, max: f64, steps: usize) -> Vec<String> {
    let digits = match compute_precision(min, max) {
        Ok(p) => (p - TICK_DIGIT_DROP).max(0),
        // InvalidRange: flat or inverted axis, labels fall back to whole numbers
        Err(_) => 0,
    };
    linspace(min, max, steps).into_iter().map(|v| format_fixed(v, digits)).collect()
}

