//! EHR access-policy optimization.
//!
//! Binds the generic [`ga`](crate::ga) engine to the access-control problem:
//! a candidate is a relaxed-binary `providers × patients` grant matrix, scored
//! against a fixed ground-truth policy by [`Evaluator`].
//!
//! # Key Types
//!
//! - [`AccessMatrix`]: Boolean grant matrix (column-major)
//! - [`Evaluator`]: Weighted precision / latency / security fitness
//! - [`OptimizerConfig`]: GA parameters plus objective weights
//! - [`RunResult`]: Best policy, its breakdown, and per-generation history
//!
//! # Example
//!
//! ```
//! use ehr_access_ga::access::{optimize, AccessMatrix, OptimizerConfig};
//! use ehr_access_ga::ga::GaConfig;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let ground_truth = AccessMatrix::random(5, 10, 0.3, &mut rng)?;
//! let config = OptimizerConfig::default()
//!     .with_ga(GaConfig::default().with_max_generations(20).with_seed(42));
//!
//! let result = optimize(&ground_truth, &config)?;
//! assert_eq!(result.generation_history.len(), 20);
//! # Ok::<(), ehr_access_ga::ConfigError>(())
//! ```

mod evaluator;
mod matrix;
mod problem;

pub use evaluator::{Evaluator, FitnessBreakdown, LatencyModel, Weights};
pub use matrix::AccessMatrix;
pub use problem::{
    optimize, optimize_with_rng, AccessPolicyProblem, Candidate, OptimizerConfig, RunResult,
};
