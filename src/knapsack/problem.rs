//! Knapsack chromosome, decoding and fitness.

use super::catalog::ItemCatalog;
use crate::error::{GaError, Result};
use crate::ga::operators::{flip_mutation, single_point_crossover};
use crate::ga::{Fitness, GaProblem, Individual};
use rand::Rng;

/// Bit-vector chromosome: bit `i` selects catalog item `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackChromosome {
    genes: Vec<bool>,
    fitness: f64,
}

impl KnapsackChromosome {
    /// Wraps raw genes. The fitness is unset until evaluated.
    pub fn new(genes: Vec<bool>) -> Self {
        KnapsackChromosome {
            genes,
            fitness: f64::worst(),
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }
}

impl Individual for KnapsackChromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Decoded view of a chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    /// Names of the selected items, in catalog order.
    pub items: Vec<String>,
    pub total_weight: u64,
    pub total_value: u64,
}

/// Largest total catalog value; fitness is ranked as `f64`, which is exact
/// up to 2^53.
pub const MAX_TOTAL_VALUE: u64 = 1 << 53;

/// A 0/1 knapsack instance: the catalog plus the weight capacity.
///
/// A negative capacity is accepted; it just makes every selection
/// infeasible.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: ItemCatalog,
    capacity: i64,
}

impl KnapsackProblem {
    /// Fails with [`GaError::InvalidParameter`] for an empty catalog, a
    /// total weight that overflows `u64`, or a total value above
    /// [`MAX_TOTAL_VALUE`].
    ///
    /// Once constructed, no selection's weight or value sum can overflow.
    pub fn new(catalog: ItemCatalog, capacity: i64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(GaError::invalid("knapsack needs at least one item"));
        }
        let items = catalog.items();
        if items.iter().try_fold(0u64, |acc, i| acc.checked_add(i.weight)).is_none() {
            return Err(GaError::invalid("total item weight overflows u64"));
        }
        let total_value = items
            .iter()
            .try_fold(0u64, |acc, i| acc.checked_add(i.value));
        if total_value.is_none_or(|v| v > MAX_TOTAL_VALUE) {
            return Err(GaError::invalid(format!(
                "total item value must not exceed {MAX_TOTAL_VALUE}"
            )));
        }
        Ok(KnapsackProblem { catalog, capacity })
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Chromosome length.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always false; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Selected item names with their summed weight and value.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the catalog size.
    pub fn decode(&self, genes: &[bool]) -> Packing {
        assert_eq!(genes.len(), self.len(), "chromosome length must match catalog size");
        let mut packing = Packing {
            items: Vec::new(),
            total_weight: 0,
            total_value: 0,
        };
        for (item, _) in self.catalog.items().iter().zip(genes).filter(|&(_, &bit)| bit) {
            packing.items.push(item.name.clone());
            packing.total_weight += item.weight;
            packing.total_value += item.value;
        }
        packing
    }

    /// Whether a total weight fits in the capacity.
    pub fn fits(&self, total_weight: u64) -> bool {
        u64::try_from(self.capacity).is_ok_and(|cap| total_weight <= cap)
    }

    /// Total value when the selection fits, otherwise exactly 0.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the catalog size.
    pub fn fitness(&self, genes: &[bool]) -> u64 {
        assert_eq!(genes.len(), self.len(), "chromosome length must match catalog size");
        let (weight, value) = self
            .catalog
            .items()
            .iter()
            .zip(genes)
            .filter(|&(_, &bit)| bit)
            .fold((0u64, 0u64), |(w, v), (item, _)| (w + item.weight, v + item.value));
        if self.fits(weight) {
            value
        } else {
            0
        }
    }
}

impl GaProblem for KnapsackProblem {
    type Individual = KnapsackChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> KnapsackChromosome {
        KnapsackChromosome::new((0..self.len()).map(|_| rng.random_bool(0.5)).collect())
    }

    fn evaluate(&self, individual: &KnapsackChromosome) -> f64 {
        // runner minimizes; exact because totals are capped at 2^53
        -(self.fitness(&individual.genes) as f64)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &KnapsackChromosome,
        parent2: &KnapsackChromosome,
        rng: &mut R,
    ) -> KnapsackChromosome {
        KnapsackChromosome::new(single_point_crossover(&parent1.genes, &parent2.genes, rng))
    }

    fn mutate<R: Rng>(&self, individual: &KnapsackChromosome, rng: &mut R) -> KnapsackChromosome {
        KnapsackChromosome::new(flip_mutation(&individual.genes, rng))
    }
}
