//! Knapsack optimization entry points.

use super::catalog::ItemCatalog;
use super::problem::{KnapsackProblem, Packing};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner, GenerationStats, Individual};
use crate::random::create_rng;
use rand::Rng;
use tracing::{info, instrument};

/// Decoded best-of-generation snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionLogEntry {
    pub generation: usize,
    pub best: Packing,
}

/// Outcome of a knapsack run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Names of the chosen items, in catalog order.
    pub selected: Vec<String>,
    pub total_weight: u64,
    pub total_value: u64,
    /// The capacity the run was constrained by.
    pub capacity: i64,
    /// Snapshots of the first and last generation (a single entry when
    /// only one generation ran).
    pub log: Vec<EvolutionLogEntry>,
    pub history: Vec<GenerationStats>,
}

impl KnapsackProblem {
    /// Runs the GA with an RNG built from `config.seed`.
    pub fn optimize(&self, config: &GaConfig) -> Result<KnapsackResult> {
        let mut rng = create_rng(config.seed);
        self.optimize_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// The reported solution is the best chromosome of the population left
    /// after the final generation.
    pub fn optimize_with_rng<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Result<KnapsackResult> {
        let last = config.generations.saturating_sub(1);
        let mut log = Vec::new();

        let result = GaRunner::run_observed(self, config, rng, |generation, best| {
            if generation == 0 || generation == last {
                log.push(EvolutionLogEntry {
                    generation,
                    best: self.decode(best.genes()),
                });
            }
        })?;

        let packing = self.decode(result.final_best.genes());
        info!(
            items = packing.items.len(),
            total_weight = packing.total_weight,
            total_value = packing.total_value,
            fitness = -result.final_best.fitness(),
            "knapsack run finished"
        );

        Ok(KnapsackResult {
            selected: packing.items,
            total_weight: packing.total_weight,
            total_value: packing.total_value,
            capacity: self.capacity(),
            log,
            history: result.history,
        })
    }
}

/// Parses `items_text`, then runs the knapsack GA.
///
/// Parsing happens first, so a malformed line fails with
/// [`GaError::Parse`](crate::GaError::Parse) before any population exists.
/// An empty catalog or a degenerate population size or generation count
/// fails with [`GaError::InvalidParameter`](crate::GaError::InvalidParameter).
///
/// ```
/// use evo_combinatorics::knapsack::solve_knapsack;
///
/// let result = solve_knapsack("Laptop, 7, 5\nBuku, 2, 4", 8, 10, 20, Some(1)).unwrap();
/// assert!(result.total_weight <= 8);
/// ```
#[instrument(level = "info", skip(items_text))]
pub fn solve_knapsack(
    items_text: &str,
    capacity: i64,
    population_size: usize,
    generations: usize,
    seed: Option<u64>,
) -> Result<KnapsackResult> {
    let catalog = ItemCatalog::parse(items_text)?;
    let problem = KnapsackProblem::new(catalog, capacity)?;
    let config = GaConfig::knapsack(population_size, generations).with_optional_seed(seed);
    info!(items = problem.len(), "starting knapsack run");
    problem.optimize(&config)
}
