// File: crates/chart-illustrate/src/illustrate.rs
// Summary: Sample a function, derive bounds and tooltip precision, and hand the chart to a renderer.

use chart_sampling::{compute_point_range, compute_precision, compute_precision_for, try_sample_func, Point};
use tracing::debug;

use crate::error::IllustrationError;
use crate::renderer::ChartRenderer;
use crate::spec::LineChartSpec;

/// Build the chart description for `func` over `[start, end]`.
pub fn build_spec<F>(mut func: F, start: f64, end: f64, step: Option<f64>) -> Result<LineChartSpec, IllustrationError>
where
    F: FnMut(f64) -> f64,
{
    build_from_samples(try_sample_func(|x| Ok::<_, IllustrationError>(func(x)), start, end, step)?, start, end)
}

/// Like [`build_spec`], for functions that can fail. The first failure is
/// returned as `IllustrationError::Evaluation` wrapping the original error.
pub fn try_build_spec<F, E>(mut func: F, start: f64, end: f64, step: Option<f64>) -> Result<LineChartSpec, IllustrationError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let samples = try_sample_func(
        |x| func(x).map_err(|e| IllustrationError::Evaluation(Box::new(e))),
        start,
        end,
        step,
    )?;
    build_from_samples(samples, start, end)
}

fn build_from_samples(samples: Vec<Point>, start: f64, end: f64) -> Result<LineChartSpec, IllustrationError> {
    let [x_bounds, y_bounds] = compute_point_range(&samples)?;

    let x_precision = compute_precision(start, end)?;
    let y_precision = compute_precision_for(&y_bounds)?;
    debug!(
        samples = samples.len(),
        y_min = y_bounds.min,
        y_max = y_bounds.max,
        x_precision,
        y_precision,
        "sampled function"
    );

    Ok(LineChartSpec {
        series_name: "f(x)".into(),
        data: samples,
        x_title: "x".into(),
        y_title: "f(x)".into(),
        x_bounds,
        y_bounds,
        x_precision,
        y_precision,
        show_markers: false,
        show_legend: false,
        title: None,
    })
}

/// Sample `func` over `[start, end]` and render it as a line chart.
pub fn make_chart<R, F>(renderer: &mut R, func: F, start: f64, end: f64, step: Option<f64>) -> Result<R::Output, IllustrationError>
where
    R: ChartRenderer + ?Sized,
    F: FnMut(f64) -> f64,
{
    let spec = build_spec(func, start, end, step)?;
    renderer.render(&spec)
}

pub fn try_make_chart<R, F, E>(renderer: &mut R, func: F, start: f64, end: f64, step: Option<f64>) -> Result<R::Output, IllustrationError>
where
    R: ChartRenderer + ?Sized,
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let spec = try_build_spec(func, start, end, step)?;
    renderer.render(&spec)
}
