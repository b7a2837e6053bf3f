//! Optimized-versus-random policy comparison.

use crate::access::{AccessMatrix, Evaluator, FitnessBreakdown, RunResult};
use crate::error::ConfigError;
use rand::Rng;
use std::fmt;

/// Grant probability used for random baseline policies.
pub const DEFAULT_BASELINE_PROBABILITY: f64 = 0.5;

/// Random baseline policy, generated like a ground truth but with its own
/// grant probability. It is never derived from the GA.
///
/// Fails with [`ConfigError::RateOutOfRange`] for a probability outside `[0, 1]`.
pub fn random_baseline<R: Rng>(
    providers: usize,
    patients: usize,
    grant_probability: f64,
    rng: &mut R,
) -> Result<AccessMatrix, ConfigError> {
    AccessMatrix::random(providers, patients, grant_probability, rng)
}

/// Scores of the optimized policy next to a random baseline.
///
/// `Display` renders the console summary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyComparison {
    pub optimized: FitnessBreakdown,
    pub baseline: FitnessBreakdown,
}

impl PolicyComparison {
    /// Scores `baseline` with the same evaluator used for the run.
    pub fn new(evaluator: &Evaluator<'_>, result: &RunResult, baseline: &AccessMatrix) -> Self {
        Self {
            optimized: result.best_fitness,
            baseline: evaluator.evaluate_matrix(baseline),
        }
    }

    /// Optimized fitness minus baseline fitness.
    pub fn fitness_gain(&self) -> f64 {
        self.optimized.fitness - self.baseline.fitness
    }
}

fn summary_line(f: &mut fmt::Formatter<'_>, label: &str, b: &FitnessBreakdown) -> fmt::Result {
    writeln!(
        f,
        "{label}: fitness={:.4} precision={:.4} latency={:.4}s security={:.4}",
        b.fitness, b.precision, b.latency, b.security
    )
}

impl fmt::Display for PolicyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary_line(f, "Optimized", &self.optimized)?;
        summary_line(f, "Baseline", &self.baseline)?;
        write!(f, "Fitness gain: {:+.4}", self.fitness_gain())
    }
}
