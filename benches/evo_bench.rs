//! Criterion benchmarks for the knapsack and TSP solvers.
//!
//! Seeds are fixed so every iteration does the same amount of work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evo_combinatorics::ga::GaConfig;
use evo_combinatorics::knapsack::{Item, ItemCatalog, KnapsackProblem};
use evo_combinatorics::random::create_rng;
use evo_combinatorics::tsp::{generate_cities, Bounds, TspProblem};

fn knapsack_problem(n: usize) -> KnapsackProblem {
    let catalog = ItemCatalog::from_items(
        (0..n).map(|i| Item::new(format!("item{i}"), (i % 13 + 1) as u64, (i * 7 % 29 + 1) as u64)),
    );
    KnapsackProblem::new(catalog, (n * 3) as i64).expect("non-empty catalog")
}

fn tsp_problem(n: usize) -> TspProblem {
    let mut rng = create_rng(Some(1));
    let cities = generate_cities(n, &Bounds::default(), &mut rng).expect("n >= 2");
    TspProblem::new(cities).expect("n >= 2")
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    for n in [20, 100] {
        let problem = knapsack_problem(n);
        let config = GaConfig::knapsack(50, 100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(problem.optimize(&config).expect("valid config")))
        });
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    for n in [10, 50] {
        let problem = tsp_problem(n);
        let config = GaConfig::tsp(100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(problem.optimize(&config).expect("valid config")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_tsp);
criterion_main!(benches);
