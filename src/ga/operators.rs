//! Genetic operators for fixed-length chromosomes.
//!
//! Every operator builds a new chromosome instead of editing a parent in
//! place, so parents and children never share a buffer.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: head of parent1, tail of parent2 — any gene type
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order of a permutation
//!
//! # Mutation Operators
//!
//! - [`flip_mutation`]: invert exactly one bit
//! - [`swap_mutation`]: exchange two distinct positions of a permutation
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// The cut is drawn uniformly from `[1, n-1]`, so both parents contribute.
/// With `n == 1` the cut is forced to 0 and the child is a copy of
/// parent2.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<T: Copy, R: Rng>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = if n == 1 { 0 } else { rng.random_range(1..n) };
    single_point_crossover_at(parent1, parent2, cut)
}

/// Single-point crossover at a fixed cut: `parent1[..cut] ++ parent2[cut..]`.
///
/// # Panics
/// Panics if parents have different lengths or `cut > len`.
pub fn single_point_crossover_at<T: Copy>(parent1: &[T], parent2: &[T], cut: usize) -> Vec<T> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Order Crossover (OX) for permutations.
///
/// # Algorithm
///
/// 1. Pick two distinct positions `start < end`
/// 2. Copy `parent1[start..end]` into the child at the same positions
/// 3. Walk parent2 from the front; each value not yet in the child goes
///    into the leftmost empty slot
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "order crossover needs at least 2 genes");

    let (start, end) = distinct_pair(n, rng);
    order_crossover_segment(parent1, parent2, start, end)
}

/// OX with a fixed segment `[start, end)` taken from `parent1`.
///
/// # Panics
/// Panics unless `start < end <= n` and parents are permutations of `0..n`.
pub fn order_crossover_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start < end && end <= n, "invalid segment [{start}, {end})");

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    let mut slot = 0;
    for &city in parent2 {
        if placed[city] {
            continue;
        }
        while child[slot].is_some() {
            slot += 1;
        }
        child[slot] = Some(city);
        placed[city] = true;
    }

    child
        .into_iter()
        .map(|gene| gene.expect("parents are permutations of the same set"))
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flip mutation: invert exactly one uniformly chosen bit.
///
/// Returns an unchanged copy for an empty chromosome.
pub fn flip_mutation<R: Rng>(genes: &[bool], rng: &mut R) -> Vec<bool> {
    let mut child = genes.to_vec();
    if !child.is_empty() {
        let i = rng.random_range(0..child.len());
        child[i] = !child[i];
    }
    child
}

/// Swap mutation: exchange the values at two distinct positions.
///
/// Returns an unchanged copy when there are fewer than 2 positions.
///
/// # Complexity
/// O(n) for the copy, O(1) for the swap
pub fn swap_mutation<R: Rng>(perm: &[usize], rng: &mut R) -> Vec<usize> {
    let mut child = perm.to_vec();
    if child.len() >= 2 {
        let (i, j) = distinct_pair(child.len(), rng);
        child.swap(i, j);
    }
    child
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct positions in `0..n`, returned as `(lo, hi)` with `lo < hi`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least 2 positions, got {n}");
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
