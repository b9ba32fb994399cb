//! Charity recommendation limits.

use serde::{Deserialize, Serialize};

const fn default_min_rating() -> u8 {
    3
}

const fn default_max_per_crisis() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharitiesConfig {
    /// Charities rated below this are never recommended.
    #[serde(default = "default_min_rating")]
    pub min_rating: u8,

    /// Cap on charities listed for one crisis.
    #[serde(default = "default_max_per_crisis")]
    pub max_per_crisis: usize,
}

impl Default for CharitiesConfig {
    fn default() -> Self {
        Self {
            min_rating: default_min_rating(),
            max_per_crisis: default_max_per_crisis(),
        }
    }
}
