//! Serde roundtrip and JsonSchema validation tests for the core entities.

use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone, Utc};
use crisis_core::entities::*;
use crisis_core::enums::*;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sudan() -> Crisis {
    Crisis {
        id: "crisis-001".into(),
        name: "Sudan Armed Conflict".into(),
        category: CrisisCategory::ArmedConflict,
        region: Region::Africa,
        country: "Sudan".into(),
        country_code: Some("SDN".into()),
        coordinates: GeoPoint::new(15.5007, 32.5599),
        urgency: UrgencyTier::CRITICAL,
        affected_population: 25_000_000,
        description: "Civil war between rival military factions.".into(),
        start_date: NaiveDate::from_ymd_opt(2023, 4, 15),
        last_updated: Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap(),
        related_charities: vec!["msf".into(), "irc".into()],
        source: SourceTag::Embedded,
        source_url: None,
        glide: None,
    }
}

roundtrip_and_validate!(crisis_roundtrip, Crisis, sudan());

roundtrip_and_validate!(
    crisis_with_network_fields_roundtrip,
    Crisis,
    Crisis {
        id: "reliefweb-51234".into(),
        source: SourceTag::ReliefWeb,
        source_url: Some("https://reliefweb.int/disaster/51234".into()),
        glide: Some("FL-2024-000123-PAK".into()),
        start_date: None,
        related_charities: Vec::new(),
        ..sudan()
    }
);

roundtrip_and_validate!(
    charity_roundtrip,
    Charity,
    Charity {
        id: "msf".into(),
        name: "Doctors Without Borders".into(),
        rating: 4,
        score: 96.5,
        category: "Health".into(),
        crisis_categories: vec![
            CrisisCategory::ArmedConflict,
            CrisisCategory::DiseaseOutbreak,
        ],
        donate_url: "https://donate.doctorswithoutborders.org".into(),
        website_url: "https://www.doctorswithoutborders.org".into(),
        description: "Emergency medical care in conflict zones.".into(),
    }
);

roundtrip_and_validate!(filter_default_roundtrip, FilterState, FilterState::default());

roundtrip_and_validate!(
    filter_narrow_roundtrip,
    FilterState,
    FilterState::default()
        .with_categories([CrisisCategory::Famine])
        .with_regions([Region::MiddleEast, Region::Global])
        .with_urgency(UrgencyTier::HIGH, UrgencyTier::CRITICAL)
);

#[test]
fn crisis_wire_names_match_data_files() {
    let value = serde_json::to_value(sudan()).unwrap();
    assert_eq!(value["type"], "conflict");
    assert_eq!(value["urgencyLevel"], 5);
    assert_eq!(value["affectedPopulation"], 25_000_000);
    assert_eq!(value["region"], "africa");
    assert_eq!(value["source"], "Embedded");
    assert_eq!(value["startDate"], "2023-04-15");
    assert!(value.get("sourceUrl").is_none());
}

#[test]
fn out_of_range_urgency_is_rejected() {
    let mut value = serde_json::to_value(sudan()).unwrap();
    value["urgencyLevel"] = serde_json::json!(9);
    assert!(serde_json::from_value::<Crisis>(value).is_err());
}

#[test]
fn filter_sets_deserialize_from_arrays() {
    let state: FilterState = serde_json::from_str(
        r#"{"categories":["famine","disease"],"regions":["asia"],"urgencyMin":2,"urgencyMax":4}"#,
    )
    .unwrap();
    assert_eq!(
        state.categories,
        BTreeSet::from([CrisisCategory::Famine, CrisisCategory::DiseaseOutbreak])
    );
    assert_eq!(state.urgency_min, UrgencyTier::ELEVATED);
}
