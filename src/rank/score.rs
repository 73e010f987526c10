//! Bayesian scoring with per-run memoization.
//!
//! A venue's score is the 5th percentile of its Beta posterior: the worst
//! approval rate still plausible given the evidence seen so far. Venues
//! with thin evidence score below venues with the same average and more
//! votes, which is the point of ranking by a lower bound.

use std::collections::HashMap;

use crate::error::Result;
use crate::rank::aggregate::CountPair;
use crate::rank::beta::{solve_quantile, DEFAULT_TOLERANCE};

/// Quantile of the Beta posterior used as the rank score.
pub const DEFAULT_QUANTILE: f64 = 0.05;

/// Memoized score computation for one ranking pass.
///
/// Many venues share identical count pairs, and each solve costs around ten
/// CDF evaluations, so scores are cached by exact pair. The cache never
/// evicts within a pass; it is bounded by the number of distinct pairs,
/// which is bounded by the number of venues. Build it fresh for each
/// pipeline run and drop it with the run.
#[derive(Debug, Clone)]
pub struct ScoreCache {
    quantile: f64,
    tolerance: f64,
    scores: HashMap<CountPair, f64>,
    solver_calls: u64,
}

impl ScoreCache {
    /// Create a cache with the default quantile and tolerance.
    pub fn new() -> Self {
        Self::with_params(DEFAULT_QUANTILE, DEFAULT_TOLERANCE)
    }

    /// Create a cache with explicit solver parameters.
    pub fn with_params(quantile: f64, tolerance: f64) -> Self {
        Self {
            quantile,
            tolerance,
            scores: HashMap::new(),
            solver_calls: 0,
        }
    }

    /// Score for a count pair: the configured quantile of
    /// Beta(approvals + 1, disapprovals + 1).
    ///
    /// Repeated calls with the same pair return the cached value without
    /// touching the solver.
    pub fn score(&mut self, pair: CountPair) -> Result<f64> {
        if let Some(&score) = self.scores.get(&pair) {
            return Ok(score);
        }

        let score = solve_quantile(
            self.quantile,
            f64::from(pair.approvals) + 1.0,
            f64::from(pair.disapprovals) + 1.0,
            self.tolerance,
        )?;
        self.solver_calls += 1;
        self.scores.insert(pair, score);

        Ok(score)
    }

    /// Number of solver invocations so far (cache misses).
    pub fn solver_calls(&self) -> u64 {
        self.solver_calls
    }

    /// Number of distinct pairs scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether any pair has been scored yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}
