//! Proportional tier partitioning of a ranked venue list.
//!
//! Tiers are contiguous slices of the ranking, sized by integer shares.
//! Boundaries come from cumulative shares rounded half-up; the final tier
//! always runs to the end of the list, so rounding can never drop or
//! duplicate a venue.

use serde::{Deserialize, Serialize};

use crate::core::TierLabel;

/// One labeled bucket of a tier assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// The tier's label.
    pub label: TierLabel,
    /// Member venue ids, best first.
    pub members: Vec<String>,
}

/// The complete partition of a ranked list into labeled tiers.
///
/// Tiers appear in configured label order. Concatenating their members in
/// that order reproduces the ranked list exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAssignment {
    /// The tiers, in label order.
    pub tiers: Vec<Tier>,
}

impl TierAssignment {
    /// Members of the tier with the given label.
    pub fn members(&self, label: TierLabel) -> Option<&[String]> {
        self.tiers
            .iter()
            .find(|tier| tier.label == label)
            .map(|tier| tier.members.as_slice())
    }

    /// All members in tier order, reproducing the ranked list.
    pub fn ranked(&self) -> Vec<String> {
        self.tiers
            .iter()
            .flat_map(|tier| tier.members.iter().cloned())
            .collect()
    }

    /// Total number of venues across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|tier| tier.members.len()).sum()
    }

    /// Whether every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split a ranked list into contiguous tiers sized by share.
///
/// The i-th boundary sits at `round(n * cumulative_share_i / total)`, half
/// rounding up. Shares are expected to be positive; a list shorter than the
/// tier count simply leaves some tiers empty.
pub fn partition(ranked: &[String], shares: &[(TierLabel, u32)]) -> TierAssignment {
    if shares.is_empty() {
        return TierAssignment::default();
    }

    let total: u32 = shares.iter().map(|(_, share)| share).sum();
    let n = ranked.len();

    let mut tiers = Vec::with_capacity(shares.len());
    let mut cumulative = 0u32;
    let mut start = 0usize;

    for (i, (label, share)) in shares.iter().enumerate() {
        cumulative += share;

        // The last tier runs to the end of the list regardless of its
        // computed boundary, so rounding can never drop a venue.
        let end = if i == shares.len() - 1 {
            n
        } else if total == 0 {
            start
        } else {
            (n as f64 * f64::from(cumulative) / f64::from(total)).round() as usize
        };

        tiers.push(Tier {
            label: *label,
            members: ranked[start..end].to_vec(),
        });
        start = end;
    }

    TierAssignment { tiers }
}
