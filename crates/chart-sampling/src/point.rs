// File: crates/chart-sampling/src/point.rs
// Summary: Sampled point and per-dimension bound types.

/// One evaluated sample `(x, f(x))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self { (p.x, p.y) }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self { p.to_array() }
}

/// Closed `[min, max]` bound of one dimension.
/// Contract: `min <= max` whenever produced by `compute_range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

impl From<Bound> for (f64, f64) {
    fn from(b: Bound) -> Self { (b.min, b.max) }
}
