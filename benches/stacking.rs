// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for stack layout.
//!
//! Measures the performance of:
//! - Offset computation over a column of heights
//! - Placement of every live toast after height reports
//! - A full create/measure/remove cycle through a mounted toaster

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toaster::toast::{stack_offsets, Settings, Store, Toaster};
use std::hint::black_box;

const STACK_SIZES: [usize; 3] = [3, 30, 300];

/// Benchmark the raw offset computation.
fn bench_stack_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    for size in STACK_SIZES {
        let heights: Vec<Option<f32>> = (0..size)
            .map(|i| (i % 4 != 0).then_some(40.0 + i as f32))
            .collect();
        group.bench_with_input(BenchmarkId::new("stack_offsets", size), &heights, |b, h| {
            b.iter(|| black_box(stack_offsets(black_box(h), 15.0)));
        });
    }

    group.finish();
}

/// Benchmark placements of a measured stack.
fn bench_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    for size in STACK_SIZES {
        let toaster: Toaster = Toaster::with_settings(Settings::default());
        for i in 0..size {
            let id = toaster.store().toast(format!("toast {i}"));
            toaster.report_height(id, 48.0);
        }
        group.bench_with_input(BenchmarkId::new("placements", size), &toaster, |b, t| {
            b.iter(|| black_box(t.placements()));
        });
    }

    group.finish();
}

/// Benchmark a create, measure and remove round through the store listener.
fn bench_toast_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    let store: Store = Store::new();
    let toaster = Toaster::new(store.clone(), Settings::default());
    for i in 0..30 {
        store.toast(format!("background {i}"));
    }

    group.bench_function("create_measure_remove", |b| {
        b.iter(|| {
            let id = store.toast("cycle");
            toaster.report_height(id, 52.0);
            black_box(toaster.placements());
            store.remove(id);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_stack_offsets,
    bench_placements,
    bench_toast_cycle
);
criterion_main!(benches);
