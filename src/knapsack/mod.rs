//! Bounded 0/1 knapsack on the GA engine.
//!
//! Items are parsed from `name, weight, value` lines into an
//! [`ItemCatalog`]; each chromosome is a bit vector over the catalog.
//! Fitness is the total value of a selection that fits the capacity and
//! exactly 0 otherwise, with no repair and no partial credit.
//!
//! Selection is [`Selection::ElitistUniform`](crate::ga::Selection):
//! one elite survives, every other parent is drawn uniformly from the
//! whole population. The reported solution is the best chromosome of the
//! final population.

mod catalog;
mod problem;
mod solver;

pub use catalog::{Item, ItemCatalog};
pub use problem::{KnapsackChromosome, KnapsackProblem, Packing, MAX_TOTAL_VALUE};
pub use solver::{solve_knapsack, EvolutionLogEntry, KnapsackResult};
