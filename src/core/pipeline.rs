//! End-to-end tier computation.

use crate::config::{Config, ScoringConfig};
use crate::core::event::{BaselineRating, RatingEvent};
use crate::core::TierLabel;
use crate::error::Result;
use crate::rank::{aggregate, partition, rank, ScoreCache, TierAssignment};

/// Composes aggregation, scoring, and partitioning over a ratings snapshot.
///
/// The pipeline holds only configuration. A fresh score cache is built for
/// every run and dropped with it, so nothing carries over between
/// invocations and a stale score can never leak into a later ranking.
#[derive(Debug, Clone)]
pub struct Pipeline {
    scoring: ScoringConfig,
    shares: Vec<(TierLabel, u32)>,
}

impl Pipeline {
    /// Create a pipeline from scoring parameters and tier shares.
    pub fn new(scoring: ScoringConfig, shares: Vec<(TierLabel, u32)>) -> Self {
        Self { scoring, shares }
    }

    /// Create a pipeline from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.scoring.clone(), config.tiers.as_pairs())
    }

    /// Compute the tier assignment for a ratings snapshot.
    pub fn run(
        &self,
        baselines: &[BaselineRating],
        events: &[RatingEvent],
    ) -> Result<TierAssignment> {
        let counts = aggregate(baselines, events, self.scoring.baseline_weight)?;
        let mut cache = ScoreCache::with_params(self.scoring.quantile, self.scoring.tolerance);
        let ranked = rank(&counts, &mut cache)?;
        Ok(partition(&ranked, &self.shares))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
