//! Ranking configuration.

use serde::{Deserialize, Serialize};

const fn default_top_per_region() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Highlighted crises kept per region.
    #[serde(default = "default_top_per_region")]
    pub top_per_region: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_per_region: default_top_per_region(),
        }
    }
}
