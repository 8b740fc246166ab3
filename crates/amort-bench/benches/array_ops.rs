//! Criterion micro-benchmarks for append, pop, and resize-heavy sequences.

use std::hint::black_box;

use amort_array::{ArrayConfig, DynamicArray};
use amort_test_utils::fixtures::{filled, grow_then_drain};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: 10K appends from empty, including every grow resize.
fn bench_append_10k(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for v in 0..10_000 {
                arr.append(v).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Baseline: the same 10K appends into a std `Vec`.
fn bench_vec_push_10k(c: &mut Criterion) {
    c.bench_function("vec_push_10k", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY);
            for x in 0..10_000i64 {
                v.push(x);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: drain a 10K-element array, including every shrink resize.
fn bench_pop_drain_10k(c: &mut Criterion) {
    c.bench_function("pop_drain_10k", |b| {
        b.iter_batched(
            || filled(10_000),
            |mut arr| {
                while let Ok(v) = arr.pop() {
                    black_box(v);
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: grow to 10K then drain, the sequence the pop charge must cover.
fn bench_grow_then_drain_10k(c: &mut Criterion) {
    let ops = grow_then_drain(10_000);
    c.bench_function("grow_then_drain_10k", |b| {
        b.iter(|| {
            let arr = amort_bench::replay(ArrayConfig::default(), &ops);
            black_box(arr.ledger().balance());
        });
    });
}

/// Benchmark: indexed reads over a 10K-element array.
fn bench_get_10k(c: &mut Criterion) {
    let arr = filled(10_000);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..arr.len() {
                sum = sum.wrapping_add(arr.get(i).unwrap());
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_append_10k,
    bench_vec_push_10k,
    bench_pop_drain_10k,
    bench_grow_then_drain_10k,
    bench_get_10k
);
criterion_main!(benches);
