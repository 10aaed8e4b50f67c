//! Criterion benchmarks for pipeline hot paths.
//!
//! Benchmarks:
//! 1. Model fit + forecast at dashboard-realistic history lengths
//! 2. Two-horizon merge over the resulting tables

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coincast_core::domain::{PricePoint, PriceSeries};
use coincast_core::forecast::forecast;
use coincast_core::merge::merge;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> PriceSeries {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let points = (0..n)
        .map(|i| PricePoint {
            date: base_date + chrono::Duration::days(i as i64),
            close: 10_000.0 + (i as f64 * 0.1).sin() * 500.0 + i as f64 * 2.0,
        })
        .collect();
    PriceSeries::from_points("BTC-USD", base_date, points)
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");

    for n in [365_usize, 1825, 3650] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::new("fit_365d", n), &series, |b, s| {
            b.iter(|| forecast(black_box(s), 365).unwrap());
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let series = make_series(1825);
    let (short, _) = forecast(&series, 30).unwrap();
    let (long, _) = forecast(&series, 365).unwrap();

    c.bench_function("merge_30d_365d", |b| {
        b.iter(|| merge(black_box(&short), black_box(&long)));
    });
}

criterion_group!(benches, bench_forecast, bench_merge);
criterion_main!(benches);
