//! Weighted multi-objective fitness for candidate access policies.
//!
//! A policy is scored on three objectives, each mapped to `[0, 1]` with
//! higher-is-better orientation:
//!
//! - **Precision**: fraction of granted cells that are also granted in the
//!   ground truth (`0` when nothing is granted).
//! - **Normalized latency**: `max(0, 1 - min(latency, cap) / cap)`, where
//!   latency grows linearly with the average per-provider grant fan-out.
//!   A policy that grants nothing serves no requests and scores `1`.
//! - **Security**: `1 - density`. Sparser matrices expose fewer records; this
//!   is a structural proxy, not a cryptographic property.
//!
//! The scalar fitness is `w1 * precision + w2 * lat_norm + w3 * security`.

use super::matrix::AccessMatrix;
use crate::error::ConfigError;
use crate::ga::operators::gene_bit;
use crate::ga::Fitness;

/// Objective weights `(w1, w2, w3)` for precision, normalized latency, and
/// security.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    pub precision: f64,
    pub latency: f64,
    pub security: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            precision: 0.4,
            latency: 0.4,
            security: 0.2,
        }
    }
}

impl Weights {
    pub fn new(precision: f64, latency: f64, security: f64) -> Self {
        Self {
            precision,
            latency,
            security,
        }
    }

    /// Upper bound of the weighted fitness.
    pub fn total(&self) -> f64 {
        self.precision + self.latency + self.security
    }

    /// Weights must be finite and non-negative. They need not sum to 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("precision", self.precision),
            ("latency", self.latency),
            ("security", self.security),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Linear latency model.
///
/// `latency = base + alpha * (grants / providers) / patients`, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatencyModel {
    /// Latency of an empty policy.
    pub base: f64,
    /// Added latency when every provider can reach every patient.
    pub alpha: f64,
    /// Latency at or above which the normalized score is zero.
    pub cap: f64,
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self {
            base: 0.8,
            alpha: 2.0,
            cap: 5.0,
        }
    }
}

impl LatencyModel {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base.is_finite() || self.base < 0.0 {
            return Err(ConfigError::InvalidLatencyModel(
                "base must be finite and non-negative",
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::InvalidLatencyModel(
                "alpha must be finite and non-negative",
            ));
        }
        if !self.cap.is_finite() || self.cap <= 0.0 {
            return Err(ConfigError::InvalidLatencyModel(
                "cap must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Raw latency for `grants` granted cells in a `providers × patients` matrix.
    pub fn latency(&self, grants: usize, providers: usize, patients: usize) -> f64 {
        if providers == 0 || patients == 0 {
            return self.base;
        }
        let avg_grants_per_provider = grants as f64 / providers as f64;
        self.base + self.alpha * (avg_grants_per_provider / patients as f64)
    }

    /// Maps latency to `[0, 1]`, higher is better.
    pub fn normalize(&self, latency: f64) -> f64 {
        (1.0 - latency.min(self.cap) / self.cap).max(0.0)
    }
}

/// Scores of one candidate policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessBreakdown {
    /// Weighted scalar fitness.
    pub fitness: f64,
    pub precision: f64,
    /// Raw latency in seconds (not normalized).
    pub latency: f64,
    pub security: f64,
}

impl Fitness for FitnessBreakdown {
    fn worst() -> Self {
        Self {
            fitness: f64::NEG_INFINITY,
            precision: 0.0,
            latency: f64::INFINITY,
            security: 0.0,
        }
    }

    fn to_f64(self) -> f64 {
        self.fitness
    }
}

/// Scores candidate policies against a fixed ground truth.
///
/// Bundles the ground truth with the weights and latency model so that
/// scoring needs nothing but the candidate. Borrowing the ground truth keeps
/// it immutable for the evaluator's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    ground_truth: &'a AccessMatrix,
    weights: Weights,
    latency: LatencyModel,
}

impl<'a> Evaluator<'a> {
    pub fn new(ground_truth: &'a AccessMatrix, weights: Weights, latency: LatencyModel) -> Self {
        Self {
            ground_truth,
            weights,
            latency,
        }
    }

    /// Evaluator with default weights (0.4 / 0.4 / 0.2) and latency model.
    pub fn with_defaults(ground_truth: &'a AccessMatrix) -> Self {
        Self::new(ground_truth, Weights::default(), LatencyModel::default())
    }

    pub fn ground_truth(&self) -> &'a AccessMatrix {
        self.ground_truth
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn latency_model(&self) -> LatencyModel {
        self.latency
    }

    /// Expected chromosome length (`providers * patients`).
    pub fn chromosome_len(&self) -> usize {
        self.ground_truth.len()
    }

    /// Decodes a relaxed-binary chromosome into a matrix shaped like the
    /// ground truth. Genes are rounded here, never in storage.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from [`chromosome_len`](Self::chromosome_len).
    pub fn decode(&self, genes: &[f64]) -> AccessMatrix {
        assert_eq!(
            genes.len(),
            self.chromosome_len(),
            "chromosome length must equal providers * patients"
        );
        AccessMatrix::from_column_major(
            self.ground_truth.providers(),
            self.ground_truth.patients(),
            genes.iter().map(|&g| gene_bit(g)).collect(),
        )
    }

    /// Scores a flat relaxed-binary chromosome.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from [`chromosome_len`](Self::chromosome_len).
    pub fn evaluate(&self, genes: &[f64]) -> FitnessBreakdown {
        self.evaluate_matrix(&self.decode(genes))
    }

    /// Scores a decoded policy.
    ///
    /// # Panics
    /// Panics if the policy shape differs from the ground truth.
    pub fn evaluate_matrix(&self, policy: &AccessMatrix) -> FitnessBreakdown {
        assert_eq!(
            (policy.providers(), policy.patients()),
            (self.ground_truth.providers(), self.ground_truth.patients()),
            "policy must have the ground-truth shape"
        );
        let grants = policy.grant_count();

        let precision = if grants == 0 {
            0.0
        } else {
            policy.overlap(self.ground_truth) as f64 / grants as f64
        };

        let latency = self
            .latency
            .latency(grants, policy.providers(), policy.patients());
        let lat_norm = if grants == 0 {
            1.0
        } else {
            self.latency.normalize(latency)
        };
        let security = 1.0 - policy.density();

        let fitness = self.weights.precision * precision
            + self.weights.latency * lat_norm
            + self.weights.security * security;

        FitnessBreakdown {
            fitness,
            precision,
            latency,
            security,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diagonal() -> AccessMatrix {
        AccessMatrix::from_rows(&[vec![true, false], vec![false, true]])
    }

    #[test]
    fn test_matching_diagonal() {
        let truth = diagonal();
        let eval = Evaluator::with_defaults(&truth);
        let b = eval.evaluate(&[1.0, 0.0, 0.0, 1.0]);

        assert!((b.precision - 1.0).abs() < 1e-12);
        assert!((b.security - 0.5).abs() < 1e-12);
        assert!((b.latency - 1.8).abs() < 1e-12);
        assert!((eval.latency_model().normalize(b.latency) - 0.64).abs() < 1e-12);
        assert!((b.fitness - 0.756).abs() < 1e-12, "got {}", b.fitness);
    }

    #[test]
    fn test_all_zero_chromosome() {
        let truth = diagonal();
        let eval = Evaluator::with_defaults(&truth);
        let b = eval.evaluate(&[0.0; 4]);

        assert_eq!(b.precision, 0.0);
        assert_eq!(b.security, 1.0);
        assert_eq!(b.latency, 0.8);
        assert!((b.fitness - 0.6).abs() < 1e-12, "got {}", b.fitness);
    }

    #[test]
    fn test_empty_policy_scores_full_latency_weight() {
        let truth = diagonal();
        let eval = Evaluator::new(&truth, Weights::new(0.0, 1.0, 0.0), LatencyModel::default());
        assert_eq!(eval.evaluate(&[0.0; 4]).fitness, 1.0);
    }

    #[test]
    fn test_all_one_chromosome() {
        let mut rng = StdRng::seed_from_u64(11);
        let truth = AccessMatrix::random(6, 9, 0.3, &mut rng).unwrap();
        let model = LatencyModel::default();
        let eval = Evaluator::new(&truth, Weights::default(), model);
        let b = eval.evaluate(&vec![1.0; 54]);

        assert_eq!(b.security, 0.0);
        assert_eq!(b.latency, model.base + model.alpha);
        assert_eq!(b.precision, truth.density());
    }

    #[test]
    fn test_relaxed_genes_round_at_decode() {
        let truth = diagonal();
        let eval = Evaluator::with_defaults(&truth);
        let relaxed = eval.evaluate(&[0.9, 0.1, 0.49, 0.5]);
        let crisp = eval.evaluate(&[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(relaxed, crisp);
    }

    #[test]
    fn test_decode_is_column_major() {
        let truth = AccessMatrix::empty(2, 3);
        let eval = Evaluator::with_defaults(&truth);
        let m = eval.decode(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        // gene 3 = provider 1, patient 1
        assert!(m.get(1, 1));
        assert_eq!(m.grant_count(), 1);
    }

    #[test]
    fn test_latency_beyond_cap_normalizes_to_zero() {
        let model = LatencyModel {
            base: 4.0,
            alpha: 3.0,
            cap: 5.0,
        };
        assert_eq!(model.normalize(model.latency(4, 2, 2)), 0.0);
    }

    #[test]
    fn test_weights_validate() {
        assert!(Weights::default().validate().is_ok());
        assert!(Weights::new(1.0, 1.0, 1.0).validate().is_ok());
        assert!(matches!(
            Weights::new(0.5, -0.1, 0.2).validate(),
            Err(ConfigError::InvalidWeight { name: "latency", .. })
        ));
        assert!(Weights::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_latency_model_validate() {
        assert!(LatencyModel::default().validate().is_ok());
        let zero_cap = LatencyModel {
            cap: 0.0,
            ..LatencyModel::default()
        };
        assert!(zero_cap.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "chromosome length")]
    fn test_wrong_length_panics() {
        let truth = diagonal();
        Evaluator::with_defaults(&truth).evaluate(&[1.0, 0.0]);
    }

    #[test]
    fn test_worst_ranks_below_everything() {
        assert!(FitnessBreakdown::worst().to_f64() < 0.0);
    }

    proptest! {
        #[test]
        fn prop_scores_stay_in_bounds(
            seed in any::<u64>(),
            providers in 1usize..8,
            patients in 1usize..8,
            w in (0.0_f64..2.0, 0.0_f64..2.0, 0.0_f64..2.0),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let truth = AccessMatrix::random(providers, patients, 0.4, &mut rng).unwrap();
            let weights = Weights::new(w.0, w.1, w.2);
            let model = LatencyModel::default();
            let eval = Evaluator::new(&truth, weights, model);
            let candidate = AccessMatrix::random(providers, patients, 0.5, &mut rng).unwrap();
            let b = eval.evaluate(&candidate.to_genes());

            prop_assert!((0.0..=1.0).contains(&b.precision));
            prop_assert!((0.0..=1.0).contains(&b.security));
            prop_assert!(b.latency >= model.base);
            prop_assert!(b.fitness >= 0.0);
            prop_assert!(b.fitness <= weights.total() + 1e-12);
        }

        #[test]
        fn prop_evaluation_is_deterministic(
            genes in proptest::collection::vec(0.0_f64..=1.0, 12),
        ) {
            let truth = AccessMatrix::random(3, 4, 0.5, &mut StdRng::seed_from_u64(2)).unwrap();
            let eval = Evaluator::with_defaults(&truth);
            prop_assert_eq!(eval.evaluate(&genes), eval.evaluate(&genes));
        }
    }
}
