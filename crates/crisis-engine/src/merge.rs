//! Merge network candidates with the embedded fallback set.

use std::collections::HashSet;

use crisis_core::Crisis;
use serde::Serialize;

/// Whether a merged set contains any live network data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// Network records, possibly supplemented by fallback records.
    Live,
    /// No network record survived; the full embedded dataset is used.
    Sample,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub crises: Vec<Crisis>,
    pub origin: DataOrigin,
}

/// Combine network candidates with the embedded fallback dataset.
///
/// Fallback records are kept only for categories the network sources cover
/// poorly, and only when neither their name nor their country already
/// appears (case-insensitively) among network records. With no network
/// record at all, the whole fallback dataset becomes the working set.
/// Unresolved (0,0) records are excluded and repeated ids keep their first
/// occurrence.
pub fn merge(network: Vec<Crisis>, fallback: &[Crisis]) -> MergeOutcome {
    let network: Vec<Crisis> = network
        .into_iter()
        .filter(Crisis::has_resolved_location)
        .collect();

    if network.is_empty() {
        tracing::info!(
            fallback = fallback.len(),
            "no network records; using the embedded dataset"
        );
        return MergeOutcome {
            crises: finalize(fallback.to_vec()),
            origin: DataOrigin::Sample,
        };
    }

    let covered: HashSet<String> = network
        .iter()
        .flat_map(|c| [c.name.to_lowercase(), c.country.to_lowercase()])
        .collect();

    let supplements: Vec<Crisis> = fallback
        .iter()
        .filter(|c| c.category.is_supplemented_by_fallback())
        .filter(|c| {
            !covered.contains(&c.name.to_lowercase()) && !covered.contains(&c.country.to_lowercase())
        })
        .cloned()
        .collect();

    tracing::debug!(
        network = network.len(),
        supplements = supplements.len(),
        "merged sources"
    );

    let mut combined = network;
    combined.extend(supplements);
    MergeOutcome {
        crises: finalize(combined),
        origin: DataOrigin::Live,
    }
}

/// Drop unresolved locations and repeated ids, keeping first occurrences.
pub fn finalize(crises: Vec<Crisis>) -> Vec<Crisis> {
    let mut seen = HashSet::new();
    crises
        .into_iter()
        .filter(Crisis::has_resolved_location)
        .filter(|c| seen.insert(c.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::crisis;
    use crisis_core::{CrisisCategory, GeoPoint, Region, SourceTag};
    use pretty_assertions::assert_eq;

    fn fallback(id: &str, name: &str, country: &str, category: CrisisCategory) -> Crisis {
        Crisis {
            name: name.into(),
            country: country.into(),
            category,
            source: SourceTag::Embedded,
            ..crisis(id, Region::Africa, 1_000)
        }
    }

    fn ids(crises: &[Crisis]) -> Vec<&str> {
        crises.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn fallback_keeps_only_uncovered_conflict_and_refugee() {
        let network = vec![Crisis {
            name: "Sudan Armed Conflict".into(),
            country: "Sudan".into(),
            ..crisis("reliefweb-1", Region::Africa, 5_000_000)
        }];
        let fallback = vec![
            fallback("crisis-003", "Sudan Armed Conflict", "Elsewhere", CrisisCategory::ArmedConflict),
            fallback("crisis-100", "Other Conflict", "SUDAN", CrisisCategory::ArmedConflict),
            fallback("crisis-014", "Venezuela Refugee Crisis", "Venezuela", CrisisCategory::RefugeeCrisis),
            fallback("crisis-009", "Somalia Drought", "Somalia", CrisisCategory::Famine),
        ];

        let outcome = merge(network, &fallback);
        assert_eq!(outcome.origin, DataOrigin::Live);
        assert_eq!(ids(&outcome.crises), vec!["reliefweb-1", "crisis-014"]);
    }

    #[test]
    fn empty_network_uses_whole_fallback() {
        let fallback = vec![
            fallback("crisis-001", "A", "X", CrisisCategory::ArmedConflict),
            fallback("crisis-002", "B", "Y", CrisisCategory::Famine),
        ];
        let outcome = merge(Vec::new(), &fallback);
        assert_eq!(outcome.origin, DataOrigin::Sample);
        assert_eq!(outcome.crises, fallback);
    }

    #[test]
    fn unresolved_network_records_count_as_absent() {
        let network = vec![Crisis {
            coordinates: GeoPoint::UNRESOLVED,
            ..crisis("gdacs-1", Region::Asia, 10)
        }];
        let fallback = vec![fallback("crisis-002", "B", "Y", CrisisCategory::Famine)];
        let outcome = merge(network, &fallback);
        assert_eq!(outcome.origin, DataOrigin::Sample);
        assert_eq!(ids(&outcome.crises), vec!["crisis-002"]);
    }

    #[test]
    fn repeated_ids_keep_first() {
        let network = vec![
            crisis("gdacs-1", Region::Asia, 10),
            Crisis {
                name: "duplicate".into(),
                ..crisis("gdacs-1", Region::Asia, 99)
            },
            crisis("gdacs-2", Region::Asia, 20),
        ];
        let outcome = merge(network, &[]);
        assert_eq!(ids(&outcome.crises), vec!["gdacs-1", "gdacs-2"]);
        assert_eq!(outcome.crises[0].affected_population, 10);
    }
}
