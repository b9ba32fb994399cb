use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CrisisCategory, Region, UrgencyTier};

/// User-selected view over the ranked crisis set.
///
/// Changing it never touches crisis data; see `crisis-engine::filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub categories: BTreeSet<CrisisCategory>,
    pub regions: BTreeSet<Region>,
    pub urgency_min: UrgencyTier,
    pub urgency_max: UrgencyTier,
}

impl Default for FilterState {
    /// Every category, the six geographic regions, tiers 1–5.
    fn default() -> Self {
        Self {
            categories: CrisisCategory::ALL.into_iter().collect(),
            regions: Region::GEOGRAPHIC.into_iter().collect(),
            urgency_min: UrgencyTier::MIN,
            urgency_max: UrgencyTier::MAX,
        }
    }
}

impl FilterState {
    /// A state that lets every record through, `Global` included.
    #[must_use]
    pub fn everything() -> Self {
        Self {
            regions: Region::ALL.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CrisisCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    /// Set the inclusive tier range. Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn with_urgency(mut self, min: UrgencyTier, max: UrgencyTier) -> Self {
        self.urgency_min = min.min(max);
        self.urgency_max = min.max(max);
        self
    }
}
