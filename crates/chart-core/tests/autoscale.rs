// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several line series.

use chart_core::{Chart, Series};
use chart_sampling::SamplingError;

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::line("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0).expect("non-empty data");

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5.0);
    assert_eq!(chart.y_axis.min, 1.0);
    assert_eq!(chart.y_axis.max, 6.0);
}

#[test]
fn autoscale_applies_y_margin_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("sq", vec![(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)]));
    chart.autoscale_axes(0.25).unwrap();

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-2.0, 2.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-1.0, 5.0));
}

#[test]
fn autoscale_opens_flat_dimension() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("flat", vec![(1.0, 3.0), (2.0, 3.0)]));
    chart.autoscale_axes(0.0).unwrap();
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (3.0, 4.0));
}

#[test]
fn autoscale_without_data_fails() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("empty", Vec::new()));
    assert_eq!(chart.autoscale_axes(0.0), Err(SamplingError::EmptyInput));
}
