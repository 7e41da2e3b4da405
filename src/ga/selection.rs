//! Survivor and parent selection.
//!
//! Each generation a [`Selection`] strategy decides which individuals are
//! carried unchanged into the next population and which pool parents are
//! drawn from. Parent draws are uniform within the pool; fitness only
//! matters for who survives.

use super::types::Individual;
use rand::Rng;

/// Selection strategy.
///
/// All strategies assume **minimization** (lower fitness = better).
///
/// ```
/// use evo_combinatorics::ga::Selection;
///
/// // keep the single best, breed from everyone
/// let knapsack = Selection::ElitistUniform;
/// // keep the best half, breed only from it
/// let tsp = Selection::Truncation;
/// assert_ne!(knapsack, tsp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Elitism of size one.
    ///
    /// The fittest individual survives unchanged; parents are drawn
    /// uniformly from the *entire* current population regardless of
    /// fitness. Selection pressure is weak.
    #[default]
    ElitistUniform,

    /// Truncation selection.
    ///
    /// The population is sorted best-first; the best `len / 2` survive
    /// unchanged and are the only breeding pool.
    Truncation,
}

/// Outcome of [`Selection::prepare`] for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breeding {
    /// Number of leading individuals carried over unchanged.
    pub survivors: usize,
    /// Parents are drawn from `population[..pool]`.
    pub pool: usize,
}

impl Selection {
    /// Reorders an evaluated `population` so survivors come first and
    /// reports the survivor count and breeding pool size.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn prepare<I: Individual>(&self, population: &mut [I]) -> Breeding {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::ElitistUniform => {
                let best = best_index(population);
                // Only the elite moves; the pool is the whole population so
                // the order of the rest is irrelevant.
                population.swap(0, best);
                Breeding {
                    survivors: 1,
                    pool: population.len(),
                }
            }
            Selection::Truncation => {
                // Stable sort keeps first-seen order among ties.
                population.sort_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                let half = population.len() / 2;
                Breeding {
                    survivors: half,
                    pool: half,
                }
            }
        }
    }

    /// Draws a parent index uniformly from `0..pool`.
    ///
    /// # Panics
    /// Panics if `pool` is zero.
    pub fn select_parent<R: Rng>(&self, pool: usize, rng: &mut R) -> usize {
        assert!(pool > 0, "breeding pool is empty");
        rng.random_range(0..pool)
    }

    /// Smallest population size this strategy can breed from.
    pub fn min_population(&self) -> usize {
        match self {
            Selection::ElitistUniform => 1,
            Selection::Truncation => 2,
        }
    }
}

/// Index of the individual with the best (lowest) fitness.
///
/// Ties resolve to the earliest index.
pub(crate) fn best_index<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() < population[best].fitness() {
            best = i;
        }
    }
    best
}
