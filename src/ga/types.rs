//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! runner and the problem instantiations (knapsack, TSP).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization). Maximizing problems
/// negate their score before handing it to the runner.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// A value no evaluated individual can be worse than.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals cache their own fitness. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// The problem value owns all instance data (item catalog and capacity,
/// or city list), so every operator is a pure function of `&self`, its
/// inputs and the injected RNG.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random generation-0 individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child from two parents.
    ///
    /// The child must satisfy the same structural invariant as its parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Returns a perturbed copy of `individual`.
    ///
    /// Always perturbs; the runner decides whether mutation happens at all
    /// based on [`GaConfig::mutation_rate`](super::GaConfig::mutation_rate).
    fn mutate<R: Rng>(&self, individual: &Self::Individual, rng: &mut R) -> Self::Individual;
}
