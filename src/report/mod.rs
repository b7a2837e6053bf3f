//! Reporting collaborators.
//!
//! Everything here runs after [`optimize`](crate::access::optimize) returns
//! and consumes only its [`RunResult`](crate::access::RunResult). Nothing in
//! this module feeds back into the optimizer.
//!
//! - [`PolicyComparison`]: optimized vs. random baseline console summary
//! - [`with_proposed_latency`]: framework comparison rows with the run's latency
//! - [`CryptoBenchmark`]: pluggable timing of asymmetric crypto primitives

mod baseline;
mod crypto;
mod frameworks;

pub use baseline::{random_baseline, PolicyComparison, DEFAULT_BASELINE_PROBABILITY};
pub use crypto::{benchmark_primitives, CryptoBenchmark, CryptoTiming, KeyAlgorithm};
pub use frameworks::{with_proposed_latency, FrameworkMetrics};
