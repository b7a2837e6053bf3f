//! Access-policy optimization as a [`GaProblem`].
//!
//! [`optimize`] is the entry point: it validates the configuration, runs the
//! GA against a fixed ground truth, and returns a [`RunResult`] that
//! reporting code consumes.

use super::evaluator::{Evaluator, FitnessBreakdown, LatencyModel, Weights};
use super::matrix::AccessMatrix;
use crate::error::ConfigError;
use crate::ga::operators::{bit_flip_mutation, single_point_crossover};
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner, Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A candidate policy: a relaxed-binary chromosome and its cached score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Genes in `[0, 1]`, column-major over `providers × patients`.
    pub genes: Vec<f64>,
    fitness: Option<FitnessBreakdown>,
}

impl Candidate {
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }
}

impl Individual for Candidate {
    type Fitness = FitnessBreakdown;

    fn fitness(&self) -> Option<FitnessBreakdown> {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: FitnessBreakdown) {
        self.fitness = Some(fitness);
    }

    fn clear_fitness(&mut self) {
        self.fitness = None;
    }
}

/// Searches for the access matrix that best fits a ground-truth policy.
pub struct AccessPolicyProblem<'a> {
    evaluator: Evaluator<'a>,
}

impl<'a> AccessPolicyProblem<'a> {
    pub fn new(evaluator: Evaluator<'a>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &Evaluator<'a> {
        &self.evaluator
    }
}

impl GaProblem for AccessPolicyProblem<'_> {
    type Individual = Candidate;

    fn chromosome_len(&self) -> usize {
        self.evaluator.chromosome_len()
    }

    /// Uniform random genes over the continuous `[0, 1]` domain.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        let genes = (0..self.chromosome_len())
            .map(|_| rng.random_range(0.0..=1.0))
            .collect();
        Candidate::new(genes)
    }

    fn evaluate(&self, individual: &Candidate) -> FitnessBreakdown {
        self.evaluator.evaluate(&individual.genes)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Candidate,
        parent2: &Candidate,
        rng: &mut R,
    ) -> (Candidate, Candidate) {
        let (g1, g2) = single_point_crossover(&parent1.genes, &parent2.genes, rng);
        (Candidate::new(g1), Candidate::new(g2))
    }

    fn mutate<R: Rng>(&self, individual: &mut Candidate, rng: &mut R) {
        bit_flip_mutation(&mut individual.genes, rng);
    }
}

/// Optimizer configuration: GA parameters plus the objective definition.
///
/// ```
/// use ehr_access_ga::access::{OptimizerConfig, Weights};
/// use ehr_access_ga::ga::GaConfig;
///
/// let config = OptimizerConfig::default()
///     .with_ga(GaConfig::default().with_seed(1))
///     .with_weights(Weights::new(0.5, 0.3, 0.2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    pub ga: GaConfig,
    pub weights: Weights,
    pub latency: LatencyModel,
}

impl OptimizerConfig {
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_latency(mut self, latency: LatencyModel) -> Self {
        self.latency = latency;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ga.validate()?;
        self.weights.validate()?;
        self.latency.validate()
    }
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best chromosome seen across all generations, genes unrounded.
    pub best_chromosome: Vec<f64>,
    /// Scores of `best_chromosome`.
    pub best_fitness: FitnessBreakdown,
    /// `best_chromosome` decoded into a policy.
    pub best_policy: AccessMatrix,
    /// Best fitness within each generation.
    pub generation_history: Vec<f64>,
    pub generations: usize,
}

impl RunResult {
    fn from_ga(result: GaResult<Candidate>, evaluator: &Evaluator<'_>) -> Self {
        let best_policy = evaluator.decode(&result.best.genes);
        Self {
            best_chromosome: result.best.genes,
            best_fitness: result.best_fitness,
            best_policy,
            generation_history: result.fitness_history,
            generations: result.generations,
        }
    }
}

/// Runs the GA against `ground_truth`, seeding the RNG from `config.ga.seed`.
///
/// # Errors
/// Returns [`ConfigError`] before any generation runs if the configuration
/// is invalid or the ground truth has fewer than two cells.
pub fn optimize(
    ground_truth: &AccessMatrix,
    config: &OptimizerConfig,
) -> Result<RunResult, ConfigError> {
    let mut rng = match config.ga.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    optimize_with_rng(ground_truth, config, &mut rng)
}

/// Runs the GA drawing all randomness from `rng`; `config.ga.seed` is ignored.
pub fn optimize_with_rng<R: Rng>(
    ground_truth: &AccessMatrix,
    config: &OptimizerConfig,
    rng: &mut R,
) -> Result<RunResult, ConfigError> {
    config.validate()?;

    let evaluator = Evaluator::new(ground_truth, config.weights, config.latency);
    let problem = AccessPolicyProblem::new(evaluator);
    let result = GaRunner::run_with_rng(&problem, &config.ga, rng)?;
    Ok(RunResult::from_ga(result, &evaluator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Fitness;

    fn ground_truth(seed: u64) -> AccessMatrix {
        AccessMatrix::random(6, 8, 0.3, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn config() -> OptimizerConfig {
        OptimizerConfig::default().with_ga(
            GaConfig::default()
                .with_population_size(30)
                .with_max_generations(40)
                .with_seed(7),
        )
    }

    #[test]
    fn test_best_matches_history_maximum() {
        let truth = ground_truth(1);
        let result = optimize(&truth, &config()).unwrap();

        let max = result
            .generation_history
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_fitness.fitness, max);
        assert_eq!(result.generation_history.len(), 40);
        assert_eq!(result.generations, 40);
    }

    #[test]
    fn test_best_breakdown_is_consistent() {
        let truth = ground_truth(2);
        let cfg = config();
        let result = optimize(&truth, &cfg).unwrap();

        let eval = Evaluator::new(&truth, cfg.weights, cfg.latency);
        assert_eq!(eval.evaluate(&result.best_chromosome), result.best_fitness);
        assert_eq!(eval.evaluate_matrix(&result.best_policy), result.best_fitness);
        assert_eq!(result.best_policy.providers(), 6);
        assert_eq!(result.best_policy.patients(), 8);
    }

    #[test]
    fn test_chromosome_stays_in_bounds() {
        let truth = ground_truth(3);
        let result = optimize(&truth, &config()).unwrap();
        assert_eq!(result.best_chromosome.len(), 48);
        assert!(result
            .best_chromosome
            .iter()
            .all(|g| (0.0..=1.0).contains(g)));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let truth = ground_truth(4);
        let a = optimize(&truth, &config()).unwrap();
        let b = optimize(&truth, &config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_never_worse_than_initial_population() {
        let truth = ground_truth(5);
        let ga = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(80)
            .with_mutation_rate(0.5)
            .with_seed(3);
        let result = optimize(&truth, &config().with_ga(ga)).unwrap();
        assert!(result.best_fitness.fitness >= result.generation_history[0]);
        assert!(result.best_fitness.fitness <= config().weights.total());
    }

    #[test]
    fn test_rejects_invalid_weights() {
        let truth = ground_truth(6);
        let cfg = config().with_weights(Weights::new(-1.0, 0.5, 0.5));
        assert!(matches!(
            optimize(&truth, &cfg),
            Err(ConfigError::InvalidWeight { name: "precision", .. })
        ));
    }

    #[test]
    fn test_rejects_single_cell_ground_truth() {
        let truth = AccessMatrix::from_rows(&[vec![true]]);
        assert_eq!(
            optimize(&truth, &config()),
            Err(ConfigError::ChromosomeTooShort(1))
        );
    }

    #[test]
    fn test_candidate_fitness_cache() {
        let mut c = Candidate::new(vec![0.0, 1.0]);
        assert!(c.fitness().is_none());
        c.set_fitness(FitnessBreakdown::worst());
        assert!(c.fitness().is_some());
        c.clear_fitness();
        assert!(c.fitness().is_none());
    }
}
