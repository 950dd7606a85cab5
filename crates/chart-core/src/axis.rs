// File: crates/chart-core/src/axis.rs
// Summary: Axis model with title and visible range.

use chart_sampling::Bound;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn from_bound(label: impl Into<String>, bound: Bound) -> Self {
        Self::new(label, bound.min, bound.max)
    }

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("f(x)", 0.0, 1.0) }

    /// Visible width, never below a tiny epsilon so pixel mapping stays finite.
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }
}
