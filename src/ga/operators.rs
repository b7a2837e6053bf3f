//! Genetic operators for fixed-length relaxed-binary chromosomes.
//!
//! Genes live in the continuous domain `[0, 1]` and decode to a bit by
//! rounding ([`gene_bit`]). The operators here never round stored genes;
//! they only move or replace whole gene values.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails at one random cut point
//! - [`crossover_at`]: the same, at a caller-chosen cut point
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: invert the decoded bit of one random gene
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;
use tracing::instrument;

/// Decoded bit of a relaxed gene. Values at or above `0.5` are set.
#[inline]
pub fn gene_bit(gene: f64) -> bool {
    gene.clamp(0.0, 1.0).round() >= 1.0
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point uniformly in `[1, n - 1]` and swaps the tail segments
/// of the two parents, producing two offspring of the same length.
///
/// # Panics
/// Panics if parents have different lengths or fewer than two genes.
#[instrument(level = "debug", skip(parent1, parent2, rng), fields(genome_length = parent1.len()))]
pub fn single_point_crossover<T: Copy, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "single-point crossover needs at least two genes");

    let point = rng.random_range(1..n);
    crossover_at(parent1, parent2, point)
}

/// Swaps the tails of two parents starting at `point`.
///
/// Child 1 is `parent1[..point] ++ parent2[point..]`, child 2 the mirror.
///
/// # Panics
/// Panics if parents have different lengths or `point` is out of bounds.
pub fn crossover_at<T: Copy>(parent1: &[T], parent2: &[T], point: usize) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(point <= n, "cut point {point} out of bounds for length {n}");

    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips the decoded bit of exactly one random gene.
///
/// The gene is replaced by the opposite boundary value (`0.0` or `1.0`),
/// so it stays inside `[0, 1]` and its decoded bit always changes.
/// Returns the mutated index, or `None` for an empty chromosome.
///
/// # Complexity
/// O(1)
pub fn bit_flip_mutation<R: Rng>(genes: &mut [f64], rng: &mut R) -> Option<usize> {
    if genes.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..genes.len());
    genes[idx] = if gene_bit(genes[idx]) { 0.0 } else { 1.0 };
    Some(idx)
}
