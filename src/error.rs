//! Error types shared across the crate.

/// Invalid optimizer or evaluator configuration.
///
/// Returned before any generation runs; configuration is never silently
/// corrected once it reaches the runner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("{name} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("chromosome length must be at least 2, got {0}")]
    ChromosomeTooShort(usize),
    #[error("weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("latency model is invalid: {0}")]
    InvalidLatencyModel(&'static str),
}

/// Failure reported by a [`CryptoBenchmark`](crate::report::CryptoBenchmark) backend.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("unsupported primitive: {algorithm} with {bits} bits")]
    Unsupported { algorithm: String, bits: u32 },
    #[error("backend failure: {0}")]
    Backend(String),
}
