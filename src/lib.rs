//! Small genetic-algorithm engine for combinatorial problems.
//!
//! One generic evolutionary loop ([`ga`]) with two instantiations:
//!
//! - **Knapsack** ([`knapsack`]): bounded 0/1 selection over a parsed item
//!   catalog, bit-vector chromosomes, single-point crossover, flip mutation.
//! - **TSP** ([`tsp`]): route search over randomly placed cities,
//!   permutation chromosomes, order crossover, swap mutation.
//!
//! Runs are synchronous and self-contained. Randomness comes from an
//! explicit RNG: seed it through [`ga::GaConfig::seed`] for reproducible
//! runs, or leave it unseeded.
//!
//! ```
//! use evo_combinatorics::{knapsack::solve_knapsack, tsp::solve_tsp};
//!
//! let packed = solve_knapsack("Laptop, 7, 5\nBuku, 2, 4", 9, 10, 10, Some(42)).unwrap();
//! assert!(packed.total_weight <= 9);
//!
//! let route = solve_tsp(6, 20, Some(42)).unwrap();
//! assert_eq!(route.route.len(), 6);
//! ```

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;
pub mod tsp;

pub use error::{GaError, Result};
