//! Percentile-based urgency tiers and per-region highlights.
//!
//! Tiers are relative to the batch being ranked: cut points sit at the
//! values found at `floor(n * 0.2)`, `floor(n * 0.4)`, `floor(n * 0.6)` and
//! `floor(n * 0.8)` of the ascending population list, and a population equal
//! to a cut point takes the higher tier.

use std::cmp::Reverse;

use crisis_core::{Crisis, Region, UrgencyTier};

/// The four population cut points of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub p20: u64,
    pub p40: u64,
    pub p60: u64,
    pub p80: u64,
}

impl Thresholds {
    /// Cut points for a batch, or `None` when it is empty.
    pub fn from_populations(populations: impl IntoIterator<Item = u64>) -> Option<Self> {
        let mut sorted: Vec<u64> = populations.into_iter().collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();
        let n = sorted.len();
        // floor(n * k / 5) is floor(n * 0.2k) without float rounding.
        let at = |fifths: usize| sorted[(n * fifths / 5).min(n - 1)];
        Some(Self {
            p20: at(1),
            p40: at(2),
            p60: at(3),
            p80: at(4),
        })
    }

    pub const fn tier_for(&self, population: u64) -> UrgencyTier {
        if population >= self.p80 {
            UrgencyTier::CRITICAL
        } else if population >= self.p60 {
            UrgencyTier::SEVERE
        } else if population >= self.p40 {
            UrgencyTier::HIGH
        } else if population >= self.p20 {
            UrgencyTier::ELEVATED
        } else {
            UrgencyTier::MONITORING
        }
    }
}

/// Overwrite every record's tier from the batch's own thresholds.
pub fn assign_tiers(crises: &mut [Crisis]) {
    let Some(thresholds) = Thresholds::from_populations(crises.iter().map(|c| c.affected_population))
    else {
        return;
    };
    tracing::debug!(?thresholds, count = crises.len(), "assigning urgency tiers");
    for crisis in crises.iter_mut() {
        crisis.urgency = thresholds.tier_for(crisis.affected_population);
    }
}

/// Top `per_region` ids of each region by (tier, population) descending.
///
/// Regions appear in order of their first record; equal records keep input
/// order.
pub fn highlight(crises: &[Crisis], per_region: usize) -> Vec<String> {
    let mut groups: Vec<(Region, Vec<&Crisis>)> = Vec::new();
    for crisis in crises {
        match groups.iter_mut().find(|(region, _)| *region == crisis.region) {
            Some((_, members)) => members.push(crisis),
            None => groups.push((crisis.region, vec![crisis])),
        }
    }

    groups
        .into_iter()
        .flat_map(|(_, mut members)| {
            members.sort_by_key(|c| (Reverse(c.urgency), Reverse(c.affected_population)));
            members.into_iter().take(per_region).map(|c| c.id.clone())
        })
        .collect()
}

/// A ranked batch with its highlighted ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub crises: Vec<Crisis>,
    pub highlighted: Vec<String>,
}

/// Assign tiers across the whole batch, then pick per-region highlights.
pub fn rank(mut crises: Vec<Crisis>, per_region: usize) -> Ranking {
    assign_tiers(&mut crises);
    let highlighted = highlight(&crises, per_region);
    Ranking {
        crises,
        highlighted,
    }
}
