//! Benchmarks for the integration engine.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. eval_batch: batched evaluation of a compiled function over a grid
//! 2. integrate: one trapezoidal integration for growing partition counts
//! 3. study: a full convergence study over the default partition sequence

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trapezoid_core::{DEFAULT_PARTITIONS, Interval, compile, integrate, study};

const INTEGRAND: &str = "exp(-x^2) * sin(3*x) + sqrt(x + 1)";

fn bench_eval_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_batch");
    let f = compile(INTEGRAND).expect("Compile failed");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let xs: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &xs, |b, xs| {
            b.iter(|| f.eval_batch(black_box(xs)));
        });
    }

    group.finish();
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");
    let f = compile(INTEGRAND).expect("Compile failed");
    let interval = Interval::new(0.0, 2.0).expect("Invalid interval");

    for n in [10, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| integrate(&f, black_box(interval), black_box(n)));
        });
    }

    group.finish();
}

fn bench_study(c: &mut Criterion) {
    let f = compile(INTEGRAND).expect("Compile failed");
    let interval = Interval::new(0.0, 2.0).expect("Invalid interval");

    c.bench_function("study/default_partitions", |b| {
        b.iter(|| study(&f, interval, black_box(1.5), &DEFAULT_PARTITIONS, 4));
    });
}

criterion_group!(benches, bench_eval_batch, bench_integrate, bench_study);
criterion_main!(benches);
