//! Tour chromosome and distance evaluation.

use super::city::City;
use crate::error::{GaError, Result};
use crate::ga::operators::{order_crossover, swap_mutation};
use crate::ga::{Fitness, GaProblem, Individual};
use crate::random::random_permutation;
use rand::Rng;

/// Permutation chromosome: the order cities are visited in.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    route: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Wraps a visiting order. The fitness is unset until evaluated.
    pub fn new(route: Vec<usize>) -> Self {
        Tour {
            route,
            fitness: f64::worst(),
        }
    }

    pub fn route(&self) -> &[usize] {
        &self.route
    }
}

impl Individual for Tour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// A Euclidean TSP instance.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<City>,
}

impl TspProblem {
    /// Fails with [`GaError::InvalidParameter`] for fewer than 2 cities.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() < 2 {
            return Err(GaError::invalid(format!(
                "tsp needs at least 2 cities, got {}",
                cities.len()
            )));
        }
        Ok(TspProblem { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Closed tour length, including the edge from the last city back to
    /// the first.
    ///
    /// # Panics
    /// Panics if `route` is not the same length as the city list or holds
    /// an out-of-range index.
    pub fn tour_distance(&self, route: &[usize]) -> f64 {
        assert_eq!(route.len(), self.cities.len(), "route length must match city count");
        let n = route.len();
        (0..n)
            .map(|i| self.cities[route[i]].distance(&self.cities[route[(i + 1) % n]]))
            .sum()
    }
}

impl GaProblem for TspProblem {
    type Individual = Tour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::new(random_permutation(self.cities.len(), rng))
    }

    fn evaluate(&self, individual: &Tour) -> f64 {
        self.tour_distance(&individual.route)
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        Tour::new(order_crossover(&parent1.route, &parent2.route, rng))
    }

    fn mutate<R: Rng>(&self, individual: &Tour, rng: &mut R) -> Tour {
        Tour::new(swap_mutation(&individual.route, rng))
    }
}
