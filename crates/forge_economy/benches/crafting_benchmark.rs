//! Benchmark for crafting graph searches.
//!
//! Run with: cargo bench --package forge_economy --bench crafting_benchmark

#![allow(missing_docs)]

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forge_economy::CraftingSystem;

/// Items per layer of the generated catalog.
const WIDTH: usize = 50;

/// Builds a layered catalog: layer 0 is basic, every item of layer `n`
/// is crafted from two items of layer `n - 1`.
fn layered_system(depth: usize) -> CraftingSystem {
    let mut system = CraftingSystem::new();

    for i in 0..WIDTH {
        system.register_item(&format!("L0_{i}"), true).unwrap();
    }
    for layer in 1..depth {
        for i in 0..WIDTH {
            let weight: i64 = [1, 2, 3][i % 3];
            let ingredients = [
                (format!("L{}_{}", layer - 1, i), weight),
                (format!("L{}_{}", layer - 1, (i + 1) % WIDTH), 1),
            ];
            system
                .register_recipe(&format!("L{layer}_{i}"), 1, &ingredients)
                .unwrap();
        }
    }

    system
}

fn full_pool() -> HashMap<String, u32> {
    (0..WIDTH).map(|i| (format!("L0_{i}"), 3)).collect()
}

fn benchmark_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachable_items");
    for depth in [10, 40] {
        let system = layered_system(depth);
        let pool = full_pool();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(system.reachable_items(black_box(&pool))));
        });
    }
    group.finish();
}

fn benchmark_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_craft_cost");
    for depth in [10, 40] {
        let system = layered_system(depth);
        let basics = system.basic_items();
        let target = format!("L{}_0", depth - 1);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(system.minimum_craft_cost(black_box(&target), &basics)));
        });
    }
    group.finish();
}

fn benchmark_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("crafting_path");
    for depth in [10, 40] {
        let system = layered_system(depth);
        let basics = system.basic_items();
        let target = format!("L{}_0", depth - 1);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(system.crafting_path(black_box(&target), &basics)));
        });
    }
    group.finish();
}

fn benchmark_cycle_detection(c: &mut Criterion) {
    let system = layered_system(40);

    c.bench_function("cycle_detection_2000_items", |b| {
        b.iter(|| black_box(system.has_cycle()));
    });
}

criterion_group!(
    benches,
    benchmark_reachability,
    benchmark_cost,
    benchmark_path,
    benchmark_cycle_detection,
);
criterion_main!(benches);
