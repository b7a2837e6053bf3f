//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → truncation selection → pairwise crossover
//! → mutation → replacement → repeat.

use super::config::GaConfig;
use super::selection;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness within each generation, one entry per generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] before any generation runs if the
    /// configuration or the problem's chromosome length is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The same RNG state and configuration always
    /// produce the same result.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;
        let chromosome_len = problem.chromosome_len();
        if chromosome_len < 2 {
            return Err(ConfigError::ChromosomeTooShort(chromosome_len));
        }

        tracing::info!(
            population_size = config.population_size,
            max_generations = config.max_generations,
            chromosome_len,
            "Starting GA run"
        );

        let parent_count = config.parent_count();

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut best: Option<(P::Individual, <P::Individual as Individual>::Fitness)> = None;
        let mut fitness_history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            evaluate_pending(problem, &mut population, config.parallel);

            // Track best-ever; only a strict improvement replaces it
            let order = selection::rank_descending(&population);
            let gen_best = &population[order[0]];
            let gen_best_fitness = gen_best.fitness().unwrap_or_else(Fitness::worst);
            fitness_history.push(gen_best_fitness.to_f64());

            let improved = best
                .as_ref()
                .map_or(true, |(_, f)| gen_best_fitness.to_f64() > f.to_f64());
            if improved {
                best = Some((gen_best.clone(), gen_best_fitness));
            }

            if let Some((_, best_fitness)) = &best {
                tracing::debug!(
                    generation = gen + 1,
                    generation_best = gen_best_fitness.to_f64(),
                    best = best_fitness.to_f64(),
                    "Generation complete"
                );
                problem.on_generation(gen + 1, *best_fitness);
            }

            if gen + 1 == config.max_generations {
                break;
            }

            population = breed(problem, config, &population, parent_count, rng);
        }

        let (best, best_fitness) = best.ok_or(ConfigError::NoGenerations)?;

        tracing::info!(
            generations = fitness_history.len(),
            best_fitness = best_fitness.to_f64(),
            "GA run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: fitness_history.len(),
            fitness_history,
        })
    }
}

/// Builds the next generation from an evaluated population.
///
/// Truncation selection keeps the top `parent_count` individuals as parents.
/// The result is `parents ++ offspring`, padded with the best non-parent
/// when the population size is odd, so its length always equals
/// `config.population_size`.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    parent_count: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    let pad = config.population_size % 2;
    let selected = selection::truncation(population, parent_count + pad);
    let (parent_idx, pad_idx) = selected.split_at(parent_count);
    let parents: Vec<&P::Individual> = parent_idx.iter().map(|&i| &population[i]).collect();

    let mut offspring: Vec<P::Individual> = Vec::with_capacity(parent_count);
    for pair in parents.chunks(2) {
        match pair {
            [p1, p2] => {
                let (mut c1, mut c2) = if rng.random_bool(config.crossover_fraction) {
                    problem.crossover(p1, p2, rng)
                } else {
                    ((*p1).clone(), (*p2).clone())
                };
                for child in [&mut c1, &mut c2] {
                    child.clear_fitness();
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(child, rng);
                    }
                }
                offspring.push(c1);
                offspring.push(c2);
            }
            // Unpaired trailing parent is carried through unchanged
            [p] => offspring.push((*p).clone()),
            _ => unreachable!("chunks(2) yields one or two parents"),
        }
    }

    let mut next_gen: Vec<P::Individual> = parents.into_iter().cloned().collect();
    next_gen.extend(offspring);
    next_gen.extend(pad_idx.iter().map(|&i| population[i].clone()));
    debug_assert_eq!(next_gen.len(), config.population_size);
    next_gen
}

/// Evaluate every individual without a cached fitness.
fn evaluate_pending<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        population
            .par_iter_mut()
            .filter(|ind| ind.fitness().is_none())
            .for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut().filter(|ind| ind.fitness().is_none()) {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================
