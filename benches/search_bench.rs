//! Criterion benchmarks for the lattice-search algorithms.
//!
//! Uses a synthetic separable quadratic cost model to measure pure engine
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice_search::annealing::{AnnealingConfig, AnnealingRunner};
use lattice_search::model::FnCostModel;
use lattice_search::space::SearchSpace;

/// Separable quadratic with the minimum at the center of every axis.
fn quadratic_space(
    dimension: usize,
    cardinality: usize,
    seed: u64,
) -> SearchSpace<FnCostModel<impl Fn(&[usize]) -> f64>> {
    let center = (cardinality / 2) as f64;
    let model = FnCostModel::new(vec![cardinality; dimension], move |c| {
        c.iter()
            .map(|&v| {
                let d = v as f64 - center;
                d * d
            })
            .sum()
    });
    SearchSpace::new(model, seed)
}

fn bench_random_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sampling");
    for dimension in [4usize, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &dimension,
            |b, &dimension| {
                b.iter(|| {
                    let space = quadratic_space(dimension, 10, 42);
                    space.sample_random(black_box(100), false).unwrap();
                    space.best().unwrap().cost().unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_greedy_descent(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_descent");
    for dimension in [4usize, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &dimension,
            |b, &dimension| {
                b.iter(|| {
                    let space = quadratic_space(dimension, 10, 42);
                    let start = space.random_point();
                    start.local_optimum().unwrap().cost().unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_simulated_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_annealing");
    for steps in [10usize, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let config = AnnealingConfig::default().with_steps_per_temperature(steps);
            b.iter(|| {
                let space = quadratic_space(8, 10, 42);
                let start = space.random_point();
                AnnealingRunner::run(&start, &config)
                    .unwrap()
                    .final_point
                    .cost()
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_random_sampling,
    bench_greedy_descent,
    bench_simulated_annealing
);
criterion_main!(benches);
