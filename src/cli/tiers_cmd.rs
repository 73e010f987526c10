//! Tiers command for toque.
//!
//! Recomputes and prints the current tier assignment.

use serde::Serialize;

use crate::rank::TierAssignment;
use crate::service::RatingService;
use crate::storage::RatingStore;

/// Output format for the tiers command.
#[derive(Debug, Clone, Serialize)]
pub struct TiersOutput {
    /// Whether the computation succeeded.
    pub success: bool,
    /// The computed tier assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<TierAssignment>,
    /// Error message if computation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TiersOutput {
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

/// The tiers command implementation.
pub struct TiersCommand<S: RatingStore> {
    service: RatingService<S>,
}

impl<S: RatingStore> TiersCommand<S> {
    /// Create a new tiers command.
    pub fn new(service: RatingService<S>) -> Self {
        Self { service }
    }

    /// Compute the current tier assignment.
    pub fn run(&self) -> TiersOutput {
        match self.service.tier_list() {
            Ok(tiers) => TiersOutput::success(tiers),
            Err(err) => TiersOutput::failure(err.to_string()),
        }
    }
}

/// Render an assignment as one line per tier.
///
/// Empty tiers render with a dash so the full ladder is always visible.
pub fn render(assignment: &TierAssignment) -> String {
    let mut out = String::new();
    for tier in &assignment.tiers {
        let members = if tier.members.is_empty() {
            "-".to_string()
        } else {
            tier.members.join(", ")
        };
        out.push_str(&format!("{}: {}\n", tier.label, members));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BaselineRating, Pipeline};
    use crate::storage::MemoryRatingStore;

    fn command_with_seeds(seeds: &[(&str, u8)]) -> TiersCommand<MemoryRatingStore> {
        let store = MemoryRatingStore::new();
        for (venue, rating) in seeds {
            store.seed(&BaselineRating::new(*venue, *rating)).unwrap();
        }
        TiersCommand::new(RatingService::new(store, Pipeline::default()))
    }

    #[test]
    fn test_tiers_covers_all_venues() {
        let command = command_with_seeds(&[("a", 5), ("b", 3), ("c", 1)]);

        let output = command.run();
        assert!(output.success);
        assert_eq!(output.tiers.unwrap().len(), 3);
    }

    #[test]
    fn test_tiers_with_empty_store() {
        let command = command_with_seeds(&[]);

        let output = command.run();
        assert!(output.success);
        assert!(output.tiers.unwrap().is_empty());
    }

    #[test]
    fn test_render_lists_every_tier() {
        let command = command_with_seeds(&[("a", 5)]);
        let output = command.run();

        let rendered = render(&output.tiers.unwrap());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("S:"));
        assert!(lines[5].starts_with("F:"));
        assert!(rendered.contains('a'));
    }
}
