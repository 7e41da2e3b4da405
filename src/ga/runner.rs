//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a fixed number of generations:
//! evaluation → selection → crossover → mutation → replacement, then one
//! final evaluation of the last population.

use super::config::GaConfig;
use super::selection::best_index;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;
use tracing::debug;

/// Per-generation statistics, recorded right after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness within this generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation.
    pub mean_fitness: f64,
    /// Best fitness seen in this or any earlier generation.
    pub best_ever_fitness: f64,
}

/// Result of a GA run.
///
/// Two notions of "best" are reported and they are not interchangeable:
/// `final_best` comes from evaluating the population left after the last
/// generation, `best_ever` is the best individual any in-loop evaluation
/// saw. Callers pick the one their problem reports.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the post-loop population.
    pub final_best: I,

    /// Best individual seen across all generations of the loop.
    pub best_ever: I,

    /// Number of generations executed. Always equals the configured count.
    pub generations: usize,

    /// One entry per generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.final_best.fitness());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG built from `config.seed`.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        Self::run_observed(problem, config, rng, |_, _| {})
    }

    /// Runs the GA and calls `observe(generation, best_of_generation)` once
    /// per generation, right after evaluation.
    pub fn run_observed<P, R, F>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        mut observe: F,
    ) -> Result<GaResult<P::Individual>>
    where
        P: GaProblem,
        R: Rng,
        F: FnMut(usize, &P::Individual),
    {
        config.validate()?;

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut best_ever: Option<P::Individual> = None;
        let mut history = Vec::with_capacity(config.generations);

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            evaluate_population(problem, &mut population);

            let gen_best = &population[best_index(&population)];
            let improved = best_ever
                .as_ref()
                .is_none_or(|b| gen_best.fitness() < b.fitness());
            if improved {
                best_ever = Some(gen_best.clone());
            }
            observe(generation, gen_best);

            let stats = GenerationStats {
                generation,
                best_fitness: gen_best.fitness().to_f64(),
                mean_fitness: mean_fitness(&population),
                best_ever_fitness: best_ever
                    .as_ref()
                    .map_or(f64::INFINITY, |b| b.fitness().to_f64()),
            };
            debug!(
                generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                best_ever = stats.best_ever_fitness,
                "generation evaluated"
            );
            history.push(stats);

            population = next_generation(problem, config, population, rng);
        }

        // 3. Final evaluation
        evaluate_population(problem, &mut population);
        let final_best = population[best_index(&population)].clone();

        Ok(GaResult {
            final_best,
            // validate() guarantees at least one generation ran
            best_ever: best_ever.unwrap_or_else(|| population[0].clone()),
            generations: config.generations,
            history,
        })
    }
}

/// Builds the next population from an evaluated one.
fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    mut population: Vec<P::Individual>,
    rng: &mut R,
) -> Vec<P::Individual> {
    let breeding = config.selection.prepare(&mut population);

    let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
    next_gen.extend_from_slice(&population[..breeding.survivors]);

    while next_gen.len() < config.population_size {
        let p1 = config.selection.select_parent(breeding.pool, rng);
        let p2 = config.selection.select_parent(breeding.pool, rng);

        let mut child = problem.crossover(&population[p1], &population[p2], rng);
        if rng.random_bool(config.mutation_rate) {
            child = problem.mutate(&child, rng);
        }
        next_gen.push(child);
    }

    next_gen
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    let sum: f64 = population.iter().map(|i| i.fitness().to_f64()).sum();
    sum / population.len() as f64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::ga::operators::{flip_mutation, single_point_crossover};
    use crate::ga::Selection;
    use crate::random::create_rng;
    use std::cell::Cell;

    // ---- OneMax problem: maximize sum of bits (minimize negative sum) ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: f64,
    }

    impl Individual for BitString {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct OneMaxProblem {
        n: usize,
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            let bits: Vec<bool> = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
            BitString {
                bits,
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            -(ind.bits.iter().filter(|&&b| b).count() as f64)
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> BitString {
            BitString {
                bits: single_point_crossover(&p1.bits, &p2.bits, rng),
                fitness: f64::worst(),
            }
        }

        fn mutate<R: Rng>(&self, ind: &BitString, rng: &mut R) -> BitString {
            BitString {
                bits: flip_mutation(&ind.bits, rng),
                fitness: f64::worst(),
            }
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMaxProblem { n: 20 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(200)
            .with_selection(Selection::Truncation)
            .with_mutation_rate(0.3)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_ever.fitness() <= -15.0,
            "expected fitness <= -15.0 for 20-bit OneMax, got {}",
            result.best_ever.fitness()
        );
    }

    #[test]
    fn test_runs_exact_generation_count() {
        let problem = OneMaxProblem { n: 10 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.generations, 30);
        assert_eq!(result.history.len(), 30);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.best_fitness <= stats.mean_fitness);
        }
    }

    #[test]
    fn test_best_ever_is_non_increasing() {
        let problem = OneMaxProblem { n: 10 };
        for selection in [Selection::ElitistUniform, Selection::Truncation] {
            let config = GaConfig::default()
                .with_population_size(20)
                .with_generations(50)
                .with_selection(selection)
                .with_seed(42);

            let result = GaRunner::run(&problem, &config).unwrap();

            for window in result.history.windows(2) {
                assert!(
                    window[1].best_ever_fitness <= window[0].best_ever_fitness,
                    "{selection:?}: best-ever fitness got worse: {} > {}",
                    window[1].best_ever_fitness,
                    window[0].best_ever_fitness
                );
            }
            assert_eq!(
                result.best_ever.fitness(),
                result.history.last().unwrap().best_ever_fitness
            );
        }
    }

    #[test]
    fn test_elitism_never_loses_generation_best() {
        // With elitism the best of generation g+1 is at least as good as g.
        let problem = OneMaxProblem { n: 12 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(40)
            .with_selection(Selection::ElitistUniform)
            .with_seed(7);

        let result = GaRunner::run(&problem, &config).unwrap();

        for window in result.history.windows(2) {
            assert!(window[1].best_fitness <= window[0].best_fitness);
        }
        assert!(result.final_best.fitness() <= result.history.last().unwrap().best_fitness);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let problem = OneMaxProblem { n: 16 };
        let config = GaConfig::default()
            .with_population_size(12)
            .with_generations(15)
            .with_seed(99);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.final_best.bits, b.final_best.bits);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let problem = OneMaxProblem { n: 8 };
        let config = GaConfig::default()
            .with_population_size(6)
            .with_generations(5);
        let mut rng = create_rng(Some(3));
        let mut seen = Vec::new();

        let result = GaRunner::run_observed(&problem, &config, &mut rng, |g, best| {
            seen.push((g, best.fitness()));
        })
        .unwrap();

        let gens: Vec<usize> = seen.iter().map(|(g, _)| *g).collect();
        assert_eq!(gens, vec![0, 1, 2, 3, 4]);
        for ((_, f), stats) in seen.iter().zip(&result.history) {
            assert_eq!(*f, stats.best_fitness);
        }
    }

    // ---- Operator call counting ----

    struct CountingProblem {
        inner: OneMaxProblem,
        crossovers: Cell<usize>,
        mutations: Cell<usize>,
    }

    impl CountingProblem {
        fn new(n: usize) -> Self {
            CountingProblem {
                inner: OneMaxProblem { n },
                crossovers: Cell::new(0),
                mutations: Cell::new(0),
            }
        }
    }

    impl GaProblem for CountingProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            self.inner.create_individual(rng)
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            self.inner.evaluate(ind)
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> BitString {
            self.crossovers.set(self.crossovers.get() + 1);
            self.inner.crossover(p1, p2, rng)
        }

        fn mutate<R: Rng>(&self, ind: &BitString, rng: &mut R) -> BitString {
            self.mutations.set(self.mutations.get() + 1);
            self.inner.mutate(ind, rng)
        }
    }

    #[test]
    fn test_mutation_rate_gates_every_child() {
        // 5 generations x 9 non-elite children
        let expected_children = 45;
        for (rate, expected_mutations) in [(0.0, 0), (1.0, expected_children)] {
            let problem = CountingProblem::new(8);
            let config = GaConfig::default()
                .with_population_size(10)
                .with_generations(5)
                .with_selection(Selection::ElitistUniform)
                .with_mutation_rate(rate)
                .with_seed(4);

            GaRunner::run(&problem, &config).unwrap();

            assert_eq!(problem.crossovers.get(), expected_children, "rate {rate}");
            assert_eq!(problem.mutations.get(), expected_mutations, "rate {rate}");
        }
    }

    #[test]
    fn test_partial_mutation_rate_mutates_some_children() {
        let problem = CountingProblem::new(8);
        let config = GaConfig::default()
            .with_population_size(101)
            .with_generations(20)
            .with_selection(Selection::ElitistUniform)
            .with_mutation_rate(0.2)
            .with_seed(9);

        GaRunner::run(&problem, &config).unwrap();

        // 2000 Bernoulli(0.2) draws: mean 400, sd ~18
        let mutations = problem.mutations.get();
        assert_eq!(problem.crossovers.get(), 2000);
        assert!((300..500).contains(&mutations), "got {mutations}");
    }

    #[test]
    fn test_mutation_applies_to_crossover_child() {
        // identical parents make crossover a copy, so every child of a fully
        // mutating run differs from the all-false parent in exactly one bit
        struct ZeroStart(OneMaxProblem);

        impl GaProblem for ZeroStart {
            type Individual = BitString;

            fn create_individual<R: Rng>(&self, _rng: &mut R) -> BitString {
                BitString {
                    bits: vec![false; self.0.n],
                    fitness: f64::worst(),
                }
            }

            fn evaluate(&self, ind: &BitString) -> f64 {
                self.0.evaluate(ind)
            }

            fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> BitString {
                self.0.crossover(p1, p2, rng)
            }

            fn mutate<R: Rng>(&self, ind: &BitString, rng: &mut R) -> BitString {
                self.0.mutate(ind, rng)
            }
        }

        let problem = ZeroStart(OneMaxProblem { n: 6 });
        let config = GaConfig::default()
            .with_population_size(8)
            .with_generations(1)
            .with_mutation_rate(1.0)
            .with_seed(2);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.final_best.fitness(), -1.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMaxProblem { n: 4 };
        let config = GaConfig::default().with_generations(0);
        assert!(matches!(
            GaRunner::run(&problem, &config),
            Err(GaError::InvalidParameter(_))
        ));
    }
}
