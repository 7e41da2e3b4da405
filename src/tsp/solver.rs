//! TSP optimization entry points.

use super::city::{generate_cities, Bounds, City};
use super::problem::TspProblem;
use crate::error::{GaError, Result};
use crate::ga::{GaConfig, GaRunner, GenerationStats, Individual};
use crate::random::create_rng;
use rand::Rng;
use tracing::{info, instrument};

/// Outcome of a TSP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// Best visiting order found, as indices into `cities`.
    pub route: Vec<usize>,
    /// Closed length of `route`.
    pub distance: f64,
    /// The instance the run solved.
    pub cities: Vec<City>,
    /// Best distance seen so far, one entry per generation. Never increases.
    pub best_distance_history: Vec<f64>,
    pub history: Vec<GenerationStats>,
}

impl TspProblem {
    /// Runs the GA with an RNG built from `config.seed`.
    pub fn optimize(&self, config: &GaConfig) -> Result<TspResult> {
        let mut rng = create_rng(config.seed);
        self.optimize_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// The reported route is the shortest one any generation produced,
    /// not merely the best of the last population.
    pub fn optimize_with_rng<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Result<TspResult> {
        let result = GaRunner::run_with_rng(self, config, rng)?;
        let best = result.best_ever;

        info!(
            cities = self.cities().len(),
            distance = best.fitness(),
            "tsp run finished"
        );

        Ok(TspResult {
            route: best.route().to_vec(),
            distance: best.fitness(),
            cities: self.cities().to_vec(),
            best_distance_history: result.history.iter().map(|s| s.best_ever_fitness).collect(),
            history: result.history,
        })
    }
}

/// Generates `city_count` random cities in the default [`Bounds`] and runs
/// the TSP GA with the fixed population size
/// [`TSP_POPULATION_SIZE`](crate::ga::TSP_POPULATION_SIZE).
///
/// The same RNG drives instance generation and evolution, so a seed
/// reproduces both.
///
/// ```
/// use evo_combinatorics::tsp::solve_tsp;
///
/// let result = solve_tsp(5, 10, Some(3)).unwrap();
/// assert_eq!(result.route.len(), 5);
/// ```
#[instrument(level = "info")]
pub fn solve_tsp(city_count: usize, generations: usize, seed: Option<u64>) -> Result<TspResult> {
    if city_count < 2 {
        return Err(GaError::invalid(format!(
            "city_count must be at least 2, got {city_count}"
        )));
    }
    let config = GaConfig::tsp(generations).with_optional_seed(seed);
    config.validate()?;

    let mut rng = create_rng(seed);
    let cities = generate_cities(city_count, &Bounds::default(), &mut rng)?;
    let problem = TspProblem::new(cities)?;
    info!(cities = city_count, "starting tsp run");
    problem.optimize_with_rng(&config, &mut rng)
}
