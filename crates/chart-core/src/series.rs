// File: crates/chart-core/src/series.rs
// Summary: Named line series over (x, y) samples.

use chart_sampling::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub show_markers: bool,
}

impl Series {
    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, show_markers: false }
    }

    pub fn from_points(name: impl Into<String>, points: &[Point]) -> Self {
        Self::line(name, points.iter().map(|&p| p.into()).collect())
    }

    pub fn with_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
