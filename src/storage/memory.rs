//! In-memory rating storage for testing.

use std::sync::RwLock;

use crate::core::{BaselineRating, RatingEvent};
use crate::error::Result;
use crate::storage::RatingStore;

/// In-memory rating store for testing.
///
/// Thread-safe implementation using `RwLock`-guarded vectors. Contents are
/// lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryRatingStore {
    baselines: RwLock<Vec<BaselineRating>>,
    events: RwLock<Vec<RatingEvent>>,
}

impl MemoryRatingStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seeded venues.
    pub fn baseline_count(&self) -> usize {
        self.baselines.read().unwrap().len()
    }

    /// Number of recorded events.
    pub fn event_count(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.baselines.write().unwrap().clear();
        self.events.write().unwrap().clear();
    }
}

impl RatingStore for MemoryRatingStore {
    fn baselines(&self) -> Result<Vec<BaselineRating>> {
        Ok(self.baselines.read().unwrap().clone())
    }

    fn events(&self) -> Result<Vec<RatingEvent>> {
        Ok(self.events.read().unwrap().clone())
    }

    fn seed(&self, baseline: &BaselineRating) -> Result<()> {
        let mut baselines = self.baselines.write().unwrap();
        match baselines.iter_mut().find(|b| b.venue == baseline.venue) {
            Some(existing) => existing.rating = baseline.rating,
            None => baselines.push(baseline.clone()),
        }
        Ok(())
    }

    fn record(&self, event: &RatingEvent) -> Result<()> {
        self.events.write().unwrap().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::tests::test_rating_store_roundtrip;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryRatingStore::new();
        test_rating_store_roundtrip(&store);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryRatingStore::new();
        assert_eq!(store.baseline_count(), 0);
        assert_eq!(store.event_count(), 0);
    }

    #[test]
    fn test_clear() {
        let store = MemoryRatingStore::new();
        store.seed(&BaselineRating::new("a", 3)).unwrap();
        store.record(&RatingEvent::new("a", 4)).unwrap();

        store.clear();
        assert_eq!(store.baseline_count(), 0);
        assert_eq!(store.event_count(), 0);
    }
}
