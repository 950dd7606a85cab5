// File: crates/chart-illustrate/src/renderer.rs
// Summary: Chart rendering capability and its Skia-backed adapters.

use std::path::{Path, PathBuf};

use chart_core::{Axis, Chart, RenderOptions, Series};
use chart_sampling::Point;

use crate::error::IllustrationError;
use crate::spec::{format_tooltip, LineChartSpec};

/// Anything that can draw a [`LineChartSpec`].
pub trait ChartRenderer {
    type Output;

    fn render(&mut self, spec: &LineChartSpec) -> Result<Self::Output, IllustrationError>;
}

/// Fraction of the y span added above and below the data so the stroke at
/// the extremes stays inside the plot clip.
pub const Y_AXIS_PADDING: f64 = 0.02;

/// Build a `chart_core::Chart` wired with the spec's tooltip, titles and bounds.
pub fn to_chart(spec: &LineChartSpec) -> Chart {
    let (x_prec, y_prec) = (spec.x_precision, spec.y_precision);
    let mut chart = Chart::new().with_tooltip(move |p| format_tooltip(Point::new(p.x, p.y), x_prec, y_prec));
    chart.x_axis = Axis::from_bound(&spec.x_title, spec.x_bounds);
    let pad = spec.y_bounds.span() * Y_AXIS_PADDING;
    chart.y_axis = Axis::new(&spec.y_title, spec.y_bounds.min - pad, spec.y_bounds.max + pad);
    chart.title = spec.title.clone();
    chart.show_legend = spec.show_legend;
    chart.add_series(Series::from_points(&spec.series_name, &spec.data).with_markers(spec.show_markers));
    chart
}

/// Renders to in-memory PNG bytes.
#[derive(Clone, Debug, Default)]
pub struct SkiaChartRenderer {
    pub options: RenderOptions,
}

impl SkiaChartRenderer {
    pub fn new(options: RenderOptions) -> Self { Self { options } }
}

impl ChartRenderer for SkiaChartRenderer {
    type Output = Vec<u8>;

    fn render(&mut self, spec: &LineChartSpec) -> Result<Vec<u8>, IllustrationError> {
        Ok(to_chart(spec).render_to_png_bytes(&self.options)?)
    }
}

/// Renders to a PNG file, creating parent directories as needed.
#[derive(Clone, Debug)]
pub struct PngFileRenderer {
    pub options: RenderOptions,
    pub path: PathBuf,
}

impl PngFileRenderer {
    pub fn new(options: RenderOptions, path: impl AsRef<Path>) -> Self {
        Self { options, path: path.as_ref().to_path_buf() }
    }
}

impl ChartRenderer for PngFileRenderer {
    type Output = PathBuf;

    fn render(&mut self, spec: &LineChartSpec) -> Result<PathBuf, IllustrationError> {
        to_chart(spec).render_to_png(&self.options, &self.path)?;
        Ok(self.path.clone())
    }
}
