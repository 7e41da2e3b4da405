//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{GaError, Result};

/// Population size used by the TSP solver; callers only pick the city
/// count and generation count.
pub const TSP_POPULATION_SIZE: usize = 100;

/// Mutation probability per knapsack child.
pub const KNAPSACK_MUTATION_RATE: f64 = 0.1;

/// Mutation probability per TSP child.
pub const TSP_MUTATION_RATE: f64 = 0.2;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use evo_combinatorics::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_combinatorics::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_selection(Selection::Truncation)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Exact number of generations to run. There is no early exit.
    pub generations: usize,

    /// Survivor and parent selection strategy.
    pub selection: Selection,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy, so runs differ from each other.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            selection: Selection::default(),
            mutation_rate: KNAPSACK_MUTATION_RATE,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Knapsack preset: elitism of one, uniform parents, mutation 0.1.
    pub fn knapsack(population_size: usize, generations: usize) -> Self {
        Self {
            population_size,
            generations,
            selection: Selection::ElitistUniform,
            mutation_rate: KNAPSACK_MUTATION_RATE,
            seed: None,
        }
    }

    /// TSP preset: truncation to the best half, mutation 0.2,
    /// population [`TSP_POPULATION_SIZE`].
    pub fn tsp(generations: usize) -> Self {
        Self {
            population_size: TSP_POPULATION_SIZE,
            generations,
            selection: Selection::Truncation,
            mutation_rate: TSP_MUTATION_RATE,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the random seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::invalid("population_size must be at least 1"));
        }
        if self.population_size < self.selection.min_population() {
            return Err(GaError::invalid(format!(
                "population_size must be at least {} for {:?} selection",
                self.selection.min_population(),
                self.selection
            )));
        }
        if self.generations == 0 {
            return Err(GaError::invalid("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
