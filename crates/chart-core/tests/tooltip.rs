// File: crates/chart-core/tests/tooltip.rs
// Purpose: Validate nearest-point lookup and tooltip formatting.

use chart_core::{Chart, Series, TooltipPoint};

fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::line("f(x)", vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]));
    chart
}

#[test]
fn nearest_point_picks_closest_x() {
    let chart = chart();
    let p = chart.nearest_point(1.4).expect("has data");
    assert_eq!(p, TooltipPoint { series: "f(x)", index: 1, x: 1.0, y: 1.0 });

    let far_right = chart.nearest_point(100.0).unwrap();
    assert_eq!(far_right.index, 2);
}

#[test]
fn nearest_point_tie_keeps_first() {
    let chart = chart();
    assert_eq!(chart.nearest_point(0.5).unwrap().index, 0);
}

#[test]
fn nearest_point_spans_series() {
    let mut chart = chart();
    chart.add_series(Series::line("g", vec![(1.45, -1.0)]));
    let p = chart.nearest_point(1.4).unwrap();
    assert_eq!(p.series, "g");
    assert_eq!(p.y, -1.0);
}

#[test]
fn tooltip_needs_formatter_and_data() {
    assert_eq!(chart().tooltip_at(1.0), None);
    assert_eq!(Chart::new().with_tooltip(|p| format!("{}", p.x)).tooltip_at(1.0), None);
}

#[test]
fn tooltip_formats_nearest_point() {
    let chart = chart().with_tooltip(|p| format!("{} @ {:.1}: {:.2}", p.series, p.x, p.y));
    assert!(chart.has_tooltip());
    assert_eq!(chart.tooltip_at(1.9).as_deref(), Some("f(x) @ 2.0: 4.00"));
}
