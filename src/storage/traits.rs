//! Rating storage traits.

use std::sync::Arc;

use crate::core::{BaselineRating, RatingEvent};
use crate::error::Result;

/// Trait for rating storage backends.
///
/// A store holds the per-venue initial ratings and the append-only stream
/// of user rating events; the pipeline reads both in full on every run.
pub trait RatingStore: Send + Sync {
    /// All seeded initial ratings, in seeding order.
    ///
    /// Re-seeding a venue replaces its rating; only the latest value is
    /// returned.
    fn baselines(&self) -> Result<Vec<BaselineRating>>;

    /// All recorded rating events, in recording order.
    fn events(&self) -> Result<Vec<RatingEvent>>;

    /// Record or replace a venue's initial rating.
    fn seed(&self, baseline: &BaselineRating) -> Result<()>;

    /// Append a user rating event.
    fn record(&self, event: &RatingEvent) -> Result<()>;
}

/// Blanket implementation of RatingStore for Arc-wrapped stores.
///
/// This allows using `Arc<T>` where `T: RatingStore` is expected, which is
/// useful for sharing stores between tests and commands.
impl<T: RatingStore + ?Sized> RatingStore for Arc<T> {
    fn baselines(&self) -> Result<Vec<BaselineRating>> {
        (**self).baselines()
    }

    fn events(&self) -> Result<Vec<RatingEvent>> {
        (**self).events()
    }

    fn seed(&self, baseline: &BaselineRating) -> Result<()> {
        (**self).seed(baseline)
    }

    fn record(&self, event: &RatingEvent) -> Result<()> {
        (**self).record(event)
    }
}
