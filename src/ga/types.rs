//! Core trait definitions for the GA framework.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic GA engine and the problem binding.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Higher fitness is considered better (maximization). A fitness may carry
/// more than one scalar (for example a breakdown of its components); the
/// runner ranks individuals by [`to_f64`](Fitness::to_f64) only.
pub trait Fitness: Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value ranking below every real fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// The scalar used for ranking, history, and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness, or `None` until the runner has
/// evaluated them. Parents that survive selection keep their score, so only
/// fresh offspring are evaluated in the next generation.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness, or `None` if not yet evaluated.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Sets the fitness of this individual.
    ///
    /// Called by the GA framework after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Discards the cached fitness. Called on offspring before evaluation.
    fn clear_fitness(&mut self);

    /// Ranking scalar; unevaluated individuals rank last.
    fn score(&self) -> f64 {
        self.fitness()
            .map(Fitness::to_f64)
            .unwrap_or_else(|| Self::Fitness::worst().to_f64())
    }
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into two offspring
/// 4. **Mutation**: how to perturb an offspring
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Length of every chromosome this problem produces.
    ///
    /// Single-point crossover needs at least two genes.
    fn chromosome_len(&self) -> usize;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be deterministic: the same individual always scores the same.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into two offspring.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an offspring in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);

    /// Called at the end of each generation with the best-ever fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
