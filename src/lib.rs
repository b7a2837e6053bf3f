//! Genetic-algorithm optimization of EHR access-control policies.
//!
//! A candidate policy is a binary `providers × patients` grant matrix. The
//! optimizer evolves a population of such matrices against a fixed
//! ground-truth policy, maximizing a weighted fitness of:
//!
//! - **Precision**: share of granted cells that the ground truth also grants
//! - **Latency**: linear in the average per-provider grant fan-out, normalized
//!   against a cap
//! - **Security**: `1 - density`, a sparsity proxy for attack surface
//!
//! # Modules
//!
//! - [`ga`]: Generic GA engine with truncation selection, single-point
//!   crossover, and single-bit mutation
//! - [`access`]: Access matrices, the fitness evaluator, and [`access::optimize`]
//! - [`report`]: Baseline comparison, framework rows, and crypto timing
//!   harness that consume a finished run
//!
//! All randomness comes from an explicit seedable RNG; a fixed seed makes a
//! whole run reproducible.

pub mod access;
mod error;
pub mod ga;
pub mod report;

pub use error::{BenchmarkError, ConfigError};
