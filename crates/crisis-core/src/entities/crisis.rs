use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CrisisCategory, Region, SourceTag, UrgencyTier};

/// Approximate location of a crisis (country centroid for network sources).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Sentinel for a location the lookup tables could not resolve.
    pub const UNRESOLVED: Self = Self { lat: 0.0, lng: 0.0 };

    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates exactly zero. Such records never reach presentation.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unresolved(self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// A normalized crisis record, whatever source it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Crisis {
    /// Source-prefixed identifier (`gdacs-…`, `reliefweb-…`, `crisis-…`).
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: CrisisCategory,
    pub region: Region,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub coordinates: GeoPoint,
    /// Placeholder until ranked; see `crisis-engine::ranking`.
    #[serde(rename = "urgencyLevel")]
    pub urgency: UrgencyTier,
    pub affected_population: u64,
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub related_charities: Vec<String>,
    pub source: SourceTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glide: Option<String>,
}

impl Crisis {
    #[must_use]
    pub fn has_resolved_location(&self) -> bool {
        !self.coordinates.is_unresolved()
    }
}
