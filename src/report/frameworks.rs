//! Framework comparison rows for throughput / latency / energy charts.
//!
//! Rows are reference figures supplied by the caller. The only computed
//! value is the proposed system's latency, taken from a finished run.

use crate::access::RunResult;

/// Performance figures for one framework.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameworkMetrics {
    pub name: String,
    /// Transactions per second.
    pub throughput_tps: f64,
    /// Seconds.
    pub latency_s: f64,
    /// Joules per transaction.
    pub energy_j: f64,
}

impl FrameworkMetrics {
    pub fn new(
        name: impl Into<String>,
        throughput_tps: f64,
        latency_s: f64,
        energy_j: f64,
    ) -> Self {
        Self {
            name: name.into(),
            throughput_tps,
            latency_s,
            energy_j,
        }
    }
}

/// Returns `frameworks` with the latency of every row named `proposed`
/// replaced by the run's best latency. Other rows are untouched.
///
/// Returns `None` when no row is named `proposed`.
pub fn with_proposed_latency(
    frameworks: &[FrameworkMetrics],
    proposed: &str,
    result: &RunResult,
) -> Option<Vec<FrameworkMetrics>> {
    if !frameworks.iter().any(|f| f.name == proposed) {
        return None;
    }
    Some(
        frameworks
            .iter()
            .map(|f| {
                if f.name == proposed {
                    FrameworkMetrics {
                        latency_s: result.best_fitness.latency,
                        ..f.clone()
                    }
                } else {
                    f.clone()
                }
            })
            .collect(),
    )
}
