//! The ranking engine.
//!
//! Raw ratings flow through three pure stages: aggregation folds them into
//! per-venue count pairs, scoring turns each pair into a Bayesian
//! lower-bound estimate of the venue's true approval rate, and partitioning
//! splits the resulting order into proportional tiers.

pub mod aggregate;
pub mod beta;
pub mod order;
pub mod score;
pub mod tiers;

pub use aggregate::{aggregate, CountPair, VenueCounts};
pub use beta::{solve_quantile, DEFAULT_TOLERANCE};
pub use order::{rank, rank_scored, ScoredVenue};
pub use score::{ScoreCache, DEFAULT_QUANTILE};
pub use tiers::{partition, Tier, TierAssignment};
