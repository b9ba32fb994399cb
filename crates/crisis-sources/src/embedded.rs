//! Embedded fallback dataset: thirty hand-curated crises and twelve charities
//! compiled into the binary.

use chrono::{DateTime, Utc};
use crisis_core::dates::{parse_date, parse_timestamp};
use crisis_core::{Charity, Crisis, CrisisCategory, GeoPoint, Region, SourceTag, UrgencyTier};
use serde::Deserialize;

use crate::error::SourceError;

const CRISES_JSON: &str = include_str!("../data/crises.json");
const CHARITIES_JSON: &str = include_str!("../data/charities.json");

/// Raw record shape of `data/crises.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedCrisis {
    id: String,
    name: String,
    #[serde(rename = "type")]
    category: CrisisCategory,
    region: Region,
    country: String,
    #[serde(default)]
    country_code: Option<String>,
    coordinates: GeoPoint,
    #[serde(default)]
    urgency_level: u8,
    description: String,
    affected_population: u64,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    related_charities: Vec<String>,
}

impl EmbeddedCrisis {
    fn into_crisis(self, now: DateTime<Utc>) -> Crisis {
        Crisis {
            id: self.id,
            name: self.name,
            category: self.category,
            region: self.region,
            country: self.country,
            country_code: self.country_code.filter(|c| !c.is_empty()),
            coordinates: self.coordinates,
            urgency: UrgencyTier::saturating(self.urgency_level),
            affected_population: self.affected_population,
            description: self.description,
            start_date: self.start_date.as_deref().and_then(parse_date),
            last_updated: self
                .last_updated
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or(now),
            related_charities: self.related_charities,
            source: SourceTag::Embedded,
            source_url: None,
            glide: None,
        }
    }
}

/// The full embedded crisis dataset, in file order.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if the bundled JSON does not decode.
pub fn crises() -> Result<Vec<Crisis>, SourceError> {
    let raw: Vec<EmbeddedCrisis> = serde_json::from_str(CRISES_JSON)?;
    let now = Utc::now();
    Ok(raw.into_iter().map(|c| c.into_crisis(now)).collect())
}

/// The embedded charity catalog, in file order.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if the bundled JSON does not decode.
pub fn charities() -> Result<Vec<Charity>, SourceError> {
    Ok(serde_json::from_str(CHARITIES_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn thirty_crises_with_unique_ids() {
        let crises = crises().unwrap();
        assert_eq!(crises.len(), 30);
        let ids: HashSet<&str> = crises.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 30);
        assert!(crises.iter().all(|c| c.id.starts_with("crisis-")));
        assert!(crises.iter().all(|c| c.source == SourceTag::Embedded));
    }

    #[test]
    fn every_crisis_is_located() {
        for crisis in crises().unwrap() {
            assert!(crisis.has_resolved_location(), "{} is unresolved", crisis.id);
        }
    }

    #[test]
    fn sudan_record_is_present() {
        let crises = crises().unwrap();
        let sudan = crises
            .iter()
            .find(|c| c.name == "Sudan Armed Conflict")
            .unwrap();
        assert_eq!(sudan.country, "Sudan");
        assert_eq!(sudan.category, CrisisCategory::ArmedConflict);
        assert_eq!(sudan.region, Region::Africa);
        assert_eq!(sudan.start_date, chrono::NaiveDate::from_ymd_opt(2023, 4, 15));
    }

    #[test]
    fn twelve_charities() {
        let charities = charities().unwrap();
        assert_eq!(charities.len(), 12);
        assert!(charities.iter().all(|c| (1..=4).contains(&c.rating)));
        assert!(charities.iter().all(|c| !c.crisis_categories.is_empty()));
    }

    #[test]
    fn crisis_charity_references_resolve() {
        let ids: HashSet<String> = charities().unwrap().into_iter().map(|c| c.id).collect();
        for crisis in crises().unwrap() {
            for charity in &crisis.related_charities {
                assert!(ids.contains(charity), "{} references {charity}", crisis.id);
            }
        }
    }
}
