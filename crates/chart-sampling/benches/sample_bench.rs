use chart_sampling::{compute_point_range, compute_precision_for, sample_func};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_func");
    for &n in &[100usize, 10_000usize, 1_000_000usize] {
        let step = 4.0 / n as f64;
        group.bench_with_input(BenchmarkId::from_parameter(n), &step, |b, &s| {
            b.iter(|| black_box(sample_func(|x| x * x, -2.0, 2.0, Some(s)).unwrap()));
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let xy = sample_func(|x| (x * 3.0).sin() * x, -50.0, 50.0, Some(1e-3)).unwrap();
    c.bench_function("range_and_precision_100k", |b| {
        b.iter(|| {
            let [_, y] = compute_point_range(black_box(&xy)).unwrap();
            black_box(compute_precision_for(&y).unwrap())
        });
    });
}

criterion_group!(benches, bench_sample, bench_range);
criterion_main!(benches);
