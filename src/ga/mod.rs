//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. Problems plug in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals. The engine maximizes fitness.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation for relaxed-binary genes
//! - [`selection`]: Truncation selection with stable tie-breaking
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{Fitness, GaProblem, Individual};
