// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Benchmarks for signal generation and metrics
//!
//! Run with: cargo bench --bench signal_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use photoacoustic_pipeline::signal::{generate, SignalMetrics};
use std::hint::black_box;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("damped_sine_generation");

    for sample_count in [100usize, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*sample_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_count),
            sample_count,
            |b, &n| b.iter(|| generate(black_box(n), 1e-8, 1e6, 5e6, 1.0)),
        );
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal_metrics");

    for sample_count in [100usize, 1_000, 10_000].iter() {
        let signal = generate(*sample_count, 1e-8, 1e6, 5e6, 1.0).expect("valid parameters");
        group.throughput(Throughput::Elements(*sample_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_count),
            &signal,
            |b, signal| b.iter(|| SignalMetrics::compute(black_box(signal))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_metrics);
criterion_main!(benches);
