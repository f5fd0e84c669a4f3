//! PageRank by power iteration.
//!
//! The engine is generic over the container holding the rank vector, so the
//! same arithmetic can be timed on each store. A dense transition-matrix
//! variant lives next to it as an extra baseline.

mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::{pagerank, IteratedPageRank, Outcome};
pub mod matrix;
pub use self::matrix::MatrixPageRank;
pub mod store;
pub use self::store::{ArrayStore, HashTableStore, MapStore, RankStore};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Probability of following an out-edge rather than teleporting.
    pub damping: f64,
    pub max_iterations: usize,
    /// Convergence bound on the L1 distance between successive rank vectors.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl Config {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub(crate) fn validate(&self) {
        assert!(
            self.damping > 0.0 && self.damping < 1.0,
            "damping={}",
            self.damping
        );
        assert!(
            self.max_iterations > 0,
            "max_iterations={}",
            self.max_iterations
        );
        assert!(self.tolerance > 0.0, "tolerance={}", self.tolerance);
    }
}
