//! Genetic Algorithm engine.
//!
//! A small, generic GA built on trait-based abstractions. Problems plug in
//! by implementing [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals. The [`knapsack`](crate::knapsack) and
//! [`tsp`](crate::tsp) modules are the two instantiations.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final-population best, best-ever, per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point, order crossover (OX), flip and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, KNAPSACK_MUTATION_RATE, TSP_MUTATION_RATE, TSP_POPULATION_SIZE};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{Breeding, Selection};
pub use types::{Fitness, GaProblem, Individual};
