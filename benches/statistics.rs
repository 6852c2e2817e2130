use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inflammation::prelude::*;
use ndarray::Array2;

fn make_table(npatients: usize, ndays: usize) -> Array2<f64> {
    Array2::from_shape_fn((npatients, ndays), |(i, j)| {
        ((i * 31 + j * 17) % 20) as f64 * 0.5
    })
}

fn bench_daily_summary(c: &mut Criterion) {
    let sizes = [(60, 40), (1000, 40), (10_000, 365)];
    let mut group = c.benchmark_group("daily_summary");
    for &(npatients, ndays) in &sizes {
        let table = make_table(npatients, ndays);
        group.throughput(Throughput::Elements((npatients * ndays) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", npatients, ndays)),
            &table,
            |b, table| {
                b.iter(|| daily_summary(table).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_nested_rows(c: &mut Criterion) {
    let rows: Vec<Vec<f64>> = make_table(1000, 40).outer_iter().map(|row| row.to_vec()).collect();
    c.bench_function("daily_mean_nested_1000x40", |b| {
        b.iter(|| daily_mean(&rows).unwrap());
    });
}

criterion_group!(benches, bench_daily_summary, bench_nested_rows);
criterion_main!(benches);
