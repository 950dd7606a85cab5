// File: crates/chart-illustrate/src/spec.rs
// Summary: Renderer-agnostic description of one line chart plus its tooltip format.

use chart_sampling::{format_fixed, Bound, Point};

/// Everything a renderer needs: series data, axis titles and bounds, and the
/// precisions the tooltip formatter is called with.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartSpec {
    pub series_name: String,
    pub data: Vec<Point>,
    pub x_title: String,
    pub y_title: String,
    pub x_bounds: Bound,
    pub y_bounds: Bound,
    pub x_precision: i32,
    pub y_precision: i32,
    pub show_markers: bool,
    pub show_legend: bool,
    pub title: Option<String>,
}

impl LineChartSpec {
    pub fn tooltip(&self, point: Point) -> String {
        format_tooltip(point, self.x_precision, self.y_precision)
    }
}

/// `"x: <x>  f(x): <y>"` with each value rounded to its own precision.
pub fn format_tooltip(point: Point, x_precision: i32, y_precision: i32) -> String {
    format!(
        "x: {}  f(x): {}",
        format_fixed(point.x, x_precision),
        format_fixed(point.y, y_precision)
    )
}
