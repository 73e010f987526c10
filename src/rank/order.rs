//! Rank ordering for scored venues.

use std::cmp::Ordering;

use crate::error::Result;
use crate::rank::aggregate::VenueCounts;
use crate::rank::score::ScoreCache;

/// A venue with its computed score.
#[derive(Debug, Clone)]
pub struct ScoredVenue {
    /// The venue id.
    pub venue: String,
    /// The Bayesian lower-bound score (0.0 to 1.0).
    pub score: f64,
}

/// Score every venue and order them best first, keeping scores.
///
/// The sort is stable: venues with identical count pairs score identically
/// and keep their seeding order, so the ranking is reproducible run to run.
pub fn rank_scored(counts: &VenueCounts, cache: &mut ScoreCache) -> Result<Vec<ScoredVenue>> {
    let mut scored = Vec::with_capacity(counts.len());
    for (venue, pair) in counts.iter() {
        scored.push(ScoredVenue {
            venue: venue.to_string(),
            score: cache.score(pair)?,
        });
    }

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(scored)
}

/// Score and order, returning only the venue ids.
pub fn rank(counts: &VenueCounts, cache: &mut ScoreCache) -> Result<Vec<String>> {
    Ok(rank_scored(counts, cache)?
        .into_iter()
        .map(|sv| sv.venue)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::aggregate::CountPair;

    fn counts(entries: &[(&str, CountPair)]) -> VenueCounts {
        let mut counts = VenueCounts::new();
        for (venue, pair) in entries {
            counts.seed(venue, *pair);
        }
        counts
    }

    #[test]
    fn test_rank_orders_by_evidence() {
        let counts = counts(&[
            ("mixed", CountPair::new(10, 10)),
            ("loved", CountPair::new(20, 0)),
            ("panned", CountPair::new(0, 20)),
        ]);
        let mut cache = ScoreCache::new();

        let ranked = rank(&counts, &mut cache).unwrap();
        assert_eq!(ranked, vec!["loved", "mixed", "panned"]);
    }

    #[test]
    fn test_rank_is_descending() {
        let counts = counts(&[
            ("a", CountPair::new(3, 9)),
            ("b", CountPair::new(9, 3)),
            ("c", CountPair::new(6, 6)),
        ]);
        let mut cache = ScoreCache::new();

        let scored = rank_scored(&counts, &mut cache).unwrap();
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_seeding_order() {
        // Identical count pairs produce exact score ties; the stable sort
        // must keep their seeding order.
        let counts = counts(&[
            ("first", CountPair::new(5, 5)),
            ("second", CountPair::new(5, 5)),
            ("third", CountPair::new(5, 5)),
        ]);
        let mut cache = ScoreCache::new();

        let ranked = rank(&counts, &mut cache).unwrap();
        assert_eq!(ranked, vec!["first", "second", "third"]);
        // One solver call serves all three.
        assert_eq!(cache.solver_calls(), 1);
    }

    #[test]
    fn test_thin_evidence_ranks_below_strong_evidence_at_same_average() {
        // Both are all-approvals, but twenty votes beat two.
        let counts = counts(&[
            ("thin", CountPair::new(2, 0)),
            ("strong", CountPair::new(20, 0)),
        ]);
        let mut cache = ScoreCache::new();

        let ranked = rank(&counts, &mut cache).unwrap();
        assert_eq!(ranked, vec!["strong", "thin"]);
    }

    #[test]
    fn test_rank_empty_counts() {
        let counts = VenueCounts::new();
        let mut cache = ScoreCache::new();
        assert!(rank(&counts, &mut cache).unwrap().is_empty());
    }
}
