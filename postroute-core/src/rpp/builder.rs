//! Builder for configuring [`RuralPostman`] solvers.

use crate::{matching::MatchingStrategy, shortest_path::Parallelism};

use super::RuralPostman;

/// Configures and constructs [`RuralPostman`] instances.
///
/// # Examples
/// ```
/// use postroute_core::{MatchingStrategy, Parallelism, RuralPostmanBuilder};
///
/// let solver = RuralPostmanBuilder::new()
///     .with_matching(MatchingStrategy::VertexScan)
///     .with_seed(7)
///     .with_parallelism(Parallelism::Sequential)
///     .build();
/// assert_eq!(solver.matching(), MatchingStrategy::VertexScan);
/// assert_eq!(solver.seed(), Some(7));
/// assert_eq!(solver.parallelism(), Parallelism::Sequential);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuralPostmanBuilder {
    matching: MatchingStrategy,
    seed: Option<u64>,
    parallelism: Parallelism,
}

impl RuralPostmanBuilder {
    /// Creates a builder populated with default parameters: greedy matching,
    /// entropy-seeded randomness, and automatic parallelism.
    ///
    /// # Examples
    /// ```
    /// use postroute_core::{MatchingStrategy, Parallelism, RuralPostmanBuilder};
    ///
    /// let builder = RuralPostmanBuilder::new();
    /// assert_eq!(builder.matching(), MatchingStrategy::Greedy);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.parallelism(), Parallelism::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the perfect-matching heuristic used for parity repair.
    #[must_use]
    pub const fn with_matching(mut self, matching: MatchingStrategy) -> Self {
        self.matching = matching;
        self
    }

    /// Returns the configured matching heuristic.
    #[must_use]
    pub const fn matching(&self) -> MatchingStrategy {
        self.matching
    }

    /// Fixes the seed of the vertex-scan heuristic for reproducible runs.
    ///
    /// # Examples
    /// ```
    /// use postroute_core::RuralPostmanBuilder;
    ///
    /// let builder = RuralPostmanBuilder::new().with_seed(42);
    /// assert_eq!(builder.seed(), Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Controls whether shortest-path trees are computed on the rayon pool.
    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns the configured parallelism.
    #[must_use]
    pub const fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Constructs the solver.
    #[must_use]
    pub const fn build(self) -> RuralPostman {
        RuralPostman {
            matching: self.matching,
            seed: self.seed,
            parallelism: self.parallelism,
        }
    }
}
