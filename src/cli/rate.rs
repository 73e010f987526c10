//! Rate command for toque.
//!
//! Submits a graded rating for a venue and prints the resulting tier
//! assignment. Invalid submissions are dropped and the current assignment
//! is returned unchanged.

use serde::Serialize;

use crate::core::Submission;
use crate::rank::TierAssignment;
use crate::service::RatingService;
use crate::storage::RatingStore;

/// Output format for the rate command.
#[derive(Debug, Clone, Serialize)]
pub struct RateOutput {
    /// Whether the submission flow completed.
    pub success: bool,
    /// The tier assignment after the submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<TierAssignment>,
    /// Error message if the flow failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RateOutput {
    /// Create a successful output.
    pub fn success(tiers: TierAssignment) -> Self {
        Self {
            success: true,
            tiers: Some(tiers),
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tiers: None,
            error: Some(error.into()),
        }
    }
}

/// The rate command implementation.
pub struct RateCommand<S: RatingStore> {
    service: RatingService<S>,
}

impl<S: RatingStore> RateCommand<S> {
    /// Create a new rate command.
    pub fn new(service: RatingService<S>) -> Self {
        Self { service }
    }

    /// Submit a graded rating.
    pub fn run(&self, user: &str, venue: &str, grade: &str) -> RateOutput {
        let submission = Submission::new(user, venue, grade);
        match self.service.submit(&submission) {
            Ok(tiers) => RateOutput::success(tiers),
            Err(err) => RateOutput::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BaselineRating, Pipeline};
    use crate::storage::MemoryRatingStore;

    fn command_with_seeds(seeds: &[(&str, u8)]) -> RateCommand<MemoryRatingStore> {
        let store = MemoryRatingStore::new();
        for (venue, rating) in seeds {
            store.seed(&BaselineRating::new(*venue, *rating)).unwrap();
        }
        RateCommand::new(RatingService::new(store, Pipeline::default()))
    }

    #[test]
    fn test_rate_returns_assignment() {
        let command = command_with_seeds(&[("noodle-bar", 3)]);

        let output = command.run("sam", "noodle-bar", "S");
        assert!(output.success);
        assert_eq!(output.tiers.unwrap().len(), 1);
    }

    #[test]
    fn test_rate_with_bad_grade_still_succeeds() {
        // A bad grade is a no-op submission, not a command failure.
        let command = command_with_seeds(&[("noodle-bar", 3)]);

        let output = command.run("sam", "noodle-bar", "Z");
        assert!(output.success);
        assert!(output.tiers.is_some());
    }

    #[test]
    fn test_rate_unseeded_venue_fails() {
        let command = command_with_seeds(&[("noodle-bar", 3)]);

        let output = command.run("sam", "phantom", "A");
        assert!(!output.success);
        assert!(output.error.unwrap().contains("phantom"));
    }
}
