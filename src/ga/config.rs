//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use ehr_access_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ehr_access_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_crossover_fraction(0.9)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Truncation selection keeps the top half as parents, so an even size
    /// is recommended. Odd sizes are padded back with the best non-parent.
    pub population_size: usize,

    /// Number of generations to run. There is no other termination criterion.
    pub max_generations: usize,

    /// Probability that a parent pair is recombined (0.0–1.0).
    ///
    /// At `1.0` (the default) every parent pair is recombined by
    /// single-point crossover. Below that, a pair that skips crossover is
    /// copied into the offspring pool and is still subject to mutation.
    pub crossover_fraction: f64,

    /// Probability that an offspring has exactly one gene flipped (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_fraction: 1.0,
            mutation_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover fraction. Out-of-range values are kept as given
    /// and rejected by [`validate`](Self::validate).
    pub fn with_crossover_fraction(mut self, fraction: f64) -> Self {
        self.crossover_fraction = fraction;
        self
    }

    /// Sets the mutation rate. Out-of-range values are kept as given and
    /// rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents kept by truncation selection.
    pub fn parent_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_rate("crossover_fraction", self.crossover_fraction)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
