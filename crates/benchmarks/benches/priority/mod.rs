//! # QC-12 Priority Index Benchmarks
//!
//! Conditions:
//! - Pools up to 50,000 pending packages
//! - Frequent metric ties (narrow fee ranges)
//! - Hot-path replacement of a re-priced package

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use qc_12_tx_priority::{
    build_ordered_index, IndexBuilder, InMemorySnapshot, Metric, OrderedIndex, PriorityComparator,
    PriorityIndexApi,
};
use qc_benchmarks::utils::generate_snapshot;
use std::time::Duration;

const METRICS: [Metric; 2] = [Metric::AggregateFee, Metric::AggregateFeeRate];

pub fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-12/build");
    group.measurement_time(Duration::from_secs(5));

    for size in [1_000, 10_000, 50_000] {
        let snapshot = generate_snapshot(size);
        group.throughput(Throughput::Elements(size as u64));

        for metric in METRICS {
            group.bench_with_input(
                BenchmarkId::new(metric.name(), size),
                &snapshot,
                |b, s| {
                    b.iter_batched(
                        || s.clone(),
                        |s| black_box(build_ordered_index(s, PriorityComparator::for_metric(metric))),
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

pub fn bench_builder_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-12/service");

    let pool = InMemorySnapshot::new(generate_snapshot(10_000));
    let builder = IndexBuilder::new(pool, Metric::AggregateFeeRate);

    group.bench_function("build_index_10k", |b| b.iter(|| black_box(builder.build_index())));
    group.finish();
}

pub fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-12/replace");

    let snapshot = generate_snapshot(10_000);
    let comparator = PriorityComparator::for_metric(Metric::AggregateFeeRate);
    let index: OrderedIndex = build_ordered_index(snapshot.clone(), comparator);
    let incoming = generate_snapshot(1).remove(0);

    group.bench_function("insert_new_into_10k", |b| {
        b.iter_batched(
            || index.clone(),
            |mut idx| black_box(idx.replace_or_insert(incoming.clone())),
            BatchSize::LargeInput,
        )
    });

    let existing = snapshot[snapshot.len() / 2].clone();
    group.bench_function("replace_existing_in_10k", |b| {
        b.iter_batched(
            || index.clone(),
            |mut idx| black_box(idx.replace_or_insert(existing.clone())),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

pub fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-12/traverse");

    let index = build_ordered_index(
        generate_snapshot(10_000),
        PriorityComparator::for_metric(Metric::AggregateFee),
    );

    for top_n in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("top_n", top_n), &top_n, |b, &n| {
            b.iter(|| {
                let total: i64 = index
                    .iter_by_priority()
                    .take(n)
                    .map(|e| e.fee_with_ancestors)
                    .sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_build(c);
    bench_builder_service(c);
    bench_replace(c);
    bench_traverse(c);
}
