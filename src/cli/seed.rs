//! Seed command for toque.
//!
//! Records a venue's initial rating, the anchor every later user rating
//! is weighed against.

use serde::Serialize;

use crate::core::{BaselineRating, MAX_RATING};
use crate::storage::RatingStore;

/// Output format for the seed command.
#[derive(Debug, Clone, Serialize)]
pub struct SeedOutput {
    /// Whether the seed was recorded.
    pub success: bool,
    /// The venue that was seeded.
    pub venue: String,
    /// The recorded rating.
    pub rating: u8,
    /// Error message if seeding failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedOutput {
    /// Create a successful output.
    pub fn success(venue: impl Into<String>, rating: u8) -> Self {
        Self {
            success: true,
            venue: venue.into(),
            rating,
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            venue: String::new(),
            rating: 0,
            error: Some(error.into()),
        }
    }
}

/// The seed command implementation.
pub struct SeedCommand<S: RatingStore> {
    store: S,
}

impl<S: RatingStore> SeedCommand<S> {
    /// Create a new seed command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record an initial rating for a venue.
    pub fn run(&self, venue: &str, rating: u8) -> SeedOutput {
        if venue.trim().is_empty() {
            return SeedOutput::failure("venue must not be empty");
        }
        if rating == 0 || rating > MAX_RATING {
            return SeedOutput::failure(format!(
                "initial rating must be between 1 and {MAX_RATING}, got {rating}"
            ));
        }

        match self.store.seed(&BaselineRating::new(venue, rating)) {
            Ok(()) => SeedOutput::success(venue, rating),
            Err(err) => SeedOutput::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryRatingStore;

    #[test]
    fn test_seed_records_baseline() {
        let command = SeedCommand::new(MemoryRatingStore::new());

        let output = command.run("noodle-bar", 4);
        assert!(output.success);
        assert_eq!(output.venue, "noodle-bar");
        assert_eq!(command.store.baseline_count(), 1);
    }

    #[test]
    fn test_seed_rejects_empty_venue() {
        let command = SeedCommand::new(MemoryRatingStore::new());

        let output = command.run("  ", 4);
        assert!(!output.success);
        assert_eq!(command.store.baseline_count(), 0);
    }

    #[test]
    fn test_seed_rejects_out_of_range_rating() {
        let command = SeedCommand::new(MemoryRatingStore::new());

        assert!(!command.run("noodle-bar", 0).success);
        assert!(!command.run("noodle-bar", 6).success);
        assert_eq!(command.store.baseline_count(), 0);
    }

    #[test]
    fn test_reseed_updates_rating() {
        let command = SeedCommand::new(MemoryRatingStore::new());

        command.run("noodle-bar", 4);
        command.run("noodle-bar", 2);

        assert_eq!(command.store.baseline_count(), 1);
        assert_eq!(command.store.baselines().unwrap()[0].rating, 2);
    }
}
