//! Euclidean traveling-salesman route search on the GA engine.
//!
//! Each chromosome is a permutation of city indices and its fitness is the
//! closed tour length (lower is better). Order crossover and swap mutation
//! keep every child a permutation.
//!
//! Selection is [`Selection::Truncation`](crate::ga::Selection): the
//! shorter half survives and is the only breeding pool. The reported
//! route is the shortest tour seen in any generation.

mod city;
mod problem;
mod solver;

pub use city::{generate_cities, Bounds, City};
pub use problem::{Tour, TspProblem};
pub use solver::{solve_tsp, TspResult};
