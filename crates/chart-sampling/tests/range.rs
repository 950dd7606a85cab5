// File: crates/chart-sampling/tests/range.rs
// Purpose: Validate pairwise combination and per-dimension range reduction.

use chart_sampling::{binary_map, compute_point_range, compute_range, Bound, Point, SamplingError};

#[test]
fn binary_map_identical_inputs_is_idempotent() {
    for &a in &[0.0, -3.5, 7.25, f64::MAX] {
        assert_eq!(binary_map(f64::min, &[a], &[a]), Ok(vec![a]));
        assert_eq!(binary_map(f64::max, &[a], &[a]), Ok(vec![a]));
    }
}

#[test]
fn binary_map_applies_elementwise() {
    let out = binary_map(|a: i32, b: i32| a * 10 + b, &[1, 2, 3], &[4, 5, 6]).unwrap();
    assert_eq!(out, vec![14, 25, 36]);
}

#[test]
fn binary_map_ignores_longer_right_side() {
    let out = binary_map(f64::max, &[1.0, 5.0], &[3.0, 2.0, 100.0]).unwrap();
    assert_eq!(out, vec![3.0, 5.0]);
}

#[test]
fn binary_map_short_right_side_fails_fast() {
    let mut called = false;
    let r = binary_map(|a: f64, b: f64| { called = true; a + b }, &[1.0, 2.0, 3.0], &[1.0]);
    assert_eq!(r, Err(SamplingError::LengthMismatch { left: 3, right: 1 }));
    assert!(!called);
}

#[test]
fn binary_map_does_not_touch_inputs() {
    let a = vec![1.0, 2.0];
    let b = vec![0.5, 4.0];
    let _ = binary_map(f64::min, &a, &b).unwrap();
    assert_eq!(a, vec![1.0, 2.0]);
    assert_eq!(b, vec![0.5, 4.0]);
}

#[test]
fn range_of_three_samples() {
    let samples = [[1.0, 5.0], [3.0, 2.0], [-1.0, 9.0]];
    let r = compute_range(&samples).unwrap();
    assert_eq!(r, vec![Bound::new(-1.0, 3.0), Bound::new(2.0, 9.0)]);
    // first sample must survive the reduction untouched
    assert_eq!(samples[0], [1.0, 5.0]);
}

#[test]
fn range_of_single_sample_is_degenerate() {
    let r = compute_range(&[vec![4.0, -2.0, 0.5]]).unwrap();
    assert_eq!(r, vec![Bound::new(4.0, 4.0), Bound::new(-2.0, -2.0), Bound::new(0.5, 0.5)]);
}

#[test]
fn range_keeps_min_below_max() {
    let samples: Vec<Vec<f64>> = (0..50).map(|i| {
        let t = i as f64 * 0.37;
        vec![t.sin(), t.cos() * 3.0, -t]
    }).collect();
    for b in compute_range(&samples).unwrap() {
        assert!(b.min <= b.max);
        assert!(b.span() >= 0.0);
    }
}

#[test]
fn range_rejects_empty_input() {
    let empty: [[f64; 2]; 0] = [];
    assert_eq!(compute_range(&empty), Err(SamplingError::EmptyInput));
}

#[test]
fn range_rejects_ragged_samples() {
    let samples = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]];
    assert_eq!(
        compute_range(&samples),
        Err(SamplingError::DimensionMismatch { index: 2, expected: 2, found: 1 })
    );
    let longer = vec![vec![1.0], vec![3.0, 4.0]];
    assert_eq!(
        compute_range(&longer),
        Err(SamplingError::DimensionMismatch { index: 1, expected: 1, found: 2 })
    );
}

#[test]
fn point_range_splits_x_and_y() {
    let pts = [Point::new(-2.0, 4.0), Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
    let [x, y] = compute_point_range(&pts).unwrap();
    assert_eq!(x, Bound::new(-2.0, 2.0));
    assert_eq!(y, Bound::new(0.0, 4.0));
    assert!(y.contains(1.0));
}
