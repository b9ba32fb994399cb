use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CrisisCategory;

/// A rated charity recommended alongside crises it works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Charity {
    pub id: String,
    pub name: String,
    /// Star rating, 1–4.
    pub rating: u8,
    /// Overall quality score, 0–100.
    pub score: f64,
    pub category: String,
    #[serde(rename = "crisisTypes")]
    pub crisis_categories: Vec<CrisisCategory>,
    pub donate_url: String,
    pub website_url: String,
    pub description: String,
}

impl Charity {
    #[must_use]
    pub fn serves(&self, category: CrisisCategory) -> bool {
        self.crisis_categories.contains(&category)
    }
}
