//! Truncation selection.
//!
//! The population is ranked by fitness (best first) and the top slice is
//! kept as breeding parents. Ranking uses a stable sort, so individuals with
//! equal fitness keep their original population order.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;

/// Returns population indices ordered by fitness, best first.
///
/// Higher fitness ranks earlier. Ties keep ascending index order.
/// Unevaluated individuals rank last.
pub fn rank_descending<I: Individual>(population: &[I]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    // sort_by is stable; total_cmp keeps NaN from scrambling the order
    order.sort_by(|&a, &b| population[b].score().total_cmp(&population[a].score()));
    order
}

/// Truncation selection: indices of the `count` best individuals, best first.
///
/// # Panics
/// Panics if `count` exceeds the population size.
pub fn truncation<I: Individual>(population: &[I], count: usize) -> Vec<usize> {
    assert!(
        count <= population.len(),
        "cannot keep {count} parents from a population of {}",
        population.len()
    );
    let mut order = rank_descending(population);
    order.truncate(count);
    order
}
