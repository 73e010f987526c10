//! Toque - Bayesian tier ranking for rated restaurants.
//!
//! Toque folds sparse positive/negative rating evidence into a conservative
//! score per venue (a low quantile of the Beta posterior over the venue's
//! true approval rate), ranks venues by that score, and splits the ranking
//! into proportional S through F tiers.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod rank;
pub mod service;
pub mod storage;

pub use cli::{RateCommand, SeedCommand, TiersCommand};
pub use config::{Config, ScoringConfig, StoreConfig, TierShare, TiersConfig};
pub use crate::core::{BaselineRating, Pipeline, RatingEvent, Submission, TierLabel, MAX_RATING};
pub use error::{Result, ToqueError};
pub use rank::{
    aggregate, partition, rank, solve_quantile, CountPair, ScoreCache, Tier, TierAssignment,
    VenueCounts, DEFAULT_QUANTILE, DEFAULT_TOLERANCE,
};
pub use service::RatingService;
pub use storage::{FileRatingStore, MemoryRatingStore, RatingStore};
