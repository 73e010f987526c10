//! Submission handling and tier recomputation.
//!
//! The service ties a rating store to the ranking pipeline. Reads replay
//! the store and recompute the assignment from scratch; writes validate the
//! submission, append one event, and recompute. An invalid submission never
//! reaches the log: it is dropped with a warning and the caller gets the
//! current assignment back unchanged.

use crate::core::{Pipeline, RatingEvent, Submission, TierLabel};
use crate::error::Result;
use crate::rank::TierAssignment;
use crate::storage::RatingStore;

/// Rating submission and tier computation service.
pub struct RatingService<S: RatingStore> {
    store: S,
    pipeline: Pipeline,
}

impl<S: RatingStore> RatingService<S> {
    /// Create a new service over a store.
    pub fn new(store: S, pipeline: Pipeline) -> Self {
        Self { store, pipeline }
    }

    /// Recompute the tier assignment from the current store contents.
    pub fn tier_list(&self) -> Result<TierAssignment> {
        let baselines = self.store.baselines()?;
        let events = self.store.events()?;
        self.pipeline.run(&baselines, &events)
    }

    /// Record a graded submission and return the updated assignment.
    ///
    /// A submission is accepted only when the user and venue are both
    /// present and the grade is one of the six tier labels. Anything else
    /// is dropped with a warning and the current assignment is returned
    /// unchanged, so a malformed submission can never corrupt the log.
    ///
    /// An accepted submission for a venue that was never seeded surfaces
    /// as an `UnknownVenue` error from the recompute: that is missing seed
    /// data, not a malformed submission.
    pub fn submit(&self, submission: &Submission) -> Result<TierAssignment> {
        let Some(label) = validate(submission) else {
            tracing::warn!(
                "dropping invalid submission (user: {:?}, venue: {:?}, grade: {:?})",
                submission.user,
                submission.venue,
                submission.grade
            );
            return self.tier_list();
        };

        let event =
            RatingEvent::new(&submission.venue, label.rating()).with_user(&submission.user);
        self.store.record(&event)?;

        self.tier_list()
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// The tier label for a valid submission, or `None`.
fn validate(submission: &Submission) -> Option<TierLabel> {
    if submission.user.trim().is_empty() || submission.venue.trim().is_empty() {
        return None;
    }
    TierLabel::parse(&submission.grade)
}
