//! Evidence aggregation.
//!
//! Each rating splits into two sides: a rating of `r` counts `r` points of
//! approval and `MAX_RATING - r` points of disapproval. Aggregation folds a
//! venue's initial rating plus all of its user events into one running pair
//! of those sums, which is the entire input the scorer needs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{BaselineRating, RatingEvent, MAX_RATING};
use crate::error::{Result, ToqueError};

/// Weighted approval evidence for one venue.
///
/// Both sides are integral by construction (sums of integer rating levels),
/// so pairs compare and hash exactly and are safe to use as cache keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountPair {
    /// Accumulated approval points.
    pub approvals: u32,
    /// Accumulated disapproval points.
    pub disapprovals: u32,
}

impl CountPair {
    /// Create a count pair from raw sums.
    pub fn new(approvals: u32, disapprovals: u32) -> Self {
        Self {
            approvals,
            disapprovals,
        }
    }

    /// Seed a pair from an initial rating at the given weight.
    ///
    /// The weight makes the cold-start prior worth that many user events, so
    /// one or two early votes cannot swamp it.
    pub fn seeded(rating: u8, weight: u32) -> Self {
        Self {
            approvals: weight * u32::from(rating),
            disapprovals: weight * u32::from(counter_rating(rating)),
        }
    }

    /// Fold one rating into the pair.
    pub fn record(&mut self, rating: u8) {
        self.approvals += u32::from(rating);
        self.disapprovals += u32::from(counter_rating(rating));
    }

    /// Total evidence weight on both sides.
    pub fn total(&self) -> u32 {
        self.approvals + self.disapprovals
    }
}

/// The disapproval side of a rating on the 0-5 scale.
fn counter_rating(rating: u8) -> u8 {
    MAX_RATING.saturating_sub(rating)
}

/// Insertion-ordered venue evidence map.
///
/// Venues keep the order they were first seeded in. That order is the
/// tie-break the ranker's stable sort preserves, so equal-scoring venues
/// rank reproducibly instead of following incidental map iteration order.
#[derive(Debug, Clone, Default)]
pub struct VenueCounts {
    entries: Vec<(String, CountPair)>,
    index: HashMap<String, usize>,
}

impl VenueCounts {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a venue's seed pair.
    ///
    /// Re-seeding keeps the venue's original slot so its tie-break position
    /// does not move.
    pub fn seed(&mut self, venue: &str, pair: CountPair) {
        match self.index.get(venue) {
            Some(&i) => self.entries[i].1 = pair,
            None => {
                self.index.insert(venue.to_string(), self.entries.len());
                self.entries.push((venue.to_string(), pair));
            }
        }
    }

    /// Fold one rating into a venue's pair.
    ///
    /// A venue that was never seeded is an error; defaulting it would
    /// fabricate evidence.
    pub fn record(&mut self, venue: &str, rating: u8) -> Result<()> {
        match self.index.get(venue) {
            Some(&i) => {
                self.entries[i].1.record(rating);
                Ok(())
            }
            None => Err(ToqueError::unknown_venue(venue)),
        }
    }

    /// Look up a venue's pair.
    pub fn get(&self, venue: &str) -> Option<CountPair> {
        self.index.get(venue).map(|&i| self.entries[i].1)
    }

    /// Iterate venues in seeding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CountPair)> {
        self.entries.iter().map(|(venue, pair)| (venue.as_str(), *pair))
    }

    /// Number of venues.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fold baselines and events into per-venue evidence.
///
/// Every venue must be seeded before any of its events appear. An event for
/// an unseeded venue fails the whole run: a missing seed means the ratings
/// log is inconsistent, and a ranking computed from the rest of it would be
/// silently wrong.
pub fn aggregate(
    baselines: &[BaselineRating],
    events: &[RatingEvent],
    baseline_weight: u32,
) -> Result<VenueCounts> {
    let mut counts = VenueCounts::new();

    for baseline in baselines {
        counts.seed(
            &baseline.venue,
            CountPair::seeded(baseline.rating, baseline_weight),
        );
    }

    for event in events {
        counts.record(&event.venue, event.rating)?;
    }

    Ok(counts)
}
