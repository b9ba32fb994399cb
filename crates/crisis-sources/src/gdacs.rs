//! GDACS natural-hazard adapter.

use chrono::{DateTime, Utc};
use crisis_core::dates::{parse_date, parse_timestamp};
use crisis_core::{Crisis, CrisisCategory, GeoPoint, SourceTag, UrgencyTier};
use serde::Deserialize;
use serde_json::Value;

use crate::error::SourceError;
use crate::transport::{self, Transport};
use crate::{SourceClient, lookup, util};

/// Assumed when a population field is present but unreadable.
const UNPARSEABLE_POPULATION: u64 = 10_000;

/// Any payload shape GDACS has been seen to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GdacsPayload {
    Collection { features: Vec<Value> },
    Features(Vec<Value>),
    Single(Value),
}

impl GdacsPayload {
    pub fn into_features(self) -> Vec<Value> {
        match self {
            Self::Collection { features } | Self::Features(features) => features,
            Self::Single(Value::Null) => Vec::new(),
            Self::Single(feature) => vec![feature],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GdacsProperties {
    eventid: Option<Value>,
    eventtype: Option<String>,
    alertlevel: Option<String>,
    name: Option<String>,
    eventname: Option<String>,
    country: Option<String>,
    iso3: Option<String>,
    description: Option<String>,
    population: Option<Value>,
    affectedpopulation: Option<Value>,
    exposed_population: Option<Value>,
    severity: Option<Severity>,
    fromdate: Option<String>,
    eventdate: Option<String>,
    todate: Option<String>,
    datemodified: Option<String>,
    url: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Severity {
    value: Option<Value>,
    unit: Option<String>,
    population: Option<Value>,
}

// ── Code tables ────────────────────────────────────────────────────

fn category_for(event_type: &str) -> CrisisCategory {
    match event_type {
        "DR" => CrisisCategory::Famine,
        // EQ, TC, FL, VO, WF, TS and anything unrecognized.
        _ => CrisisCategory::NaturalDisaster,
    }
}

fn provisional_tier(alert_level: &str) -> UrgencyTier {
    match alert_level {
        "Red" => UrgencyTier::CRITICAL,
        "Orange" => UrgencyTier::HIGH,
        "Green" => UrgencyTier::MONITORING,
        _ => UrgencyTier::ELEVATED,
    }
}

fn estimated_population(alert_level: &str) -> u64 {
    match alert_level {
        "Red" => 5_000_000,
        "Orange" => 1_000_000,
        "Green" => 100_000,
        _ => 500_000,
    }
}

fn type_name(event_type: &str) -> &'static str {
    match event_type {
        "EQ" => "Earthquake",
        "TC" => "Tropical Cyclone",
        "FL" => "Flood",
        "VO" => "Volcanic Activity",
        "DR" => "Drought",
        "WF" => "Wildfire",
        "TS" => "Tsunami",
        _ => "Disaster",
    }
}

fn canned_description(event_type: &str) -> &'static str {
    match event_type {
        "EQ" => "Earthquake event detected by GDACS monitoring systems.",
        "TC" => "Tropical cyclone being tracked by GDACS.",
        "FL" => "Flooding event reported by GDACS.",
        "VO" => "Volcanic activity detected.",
        "DR" => "Drought conditions reported.",
        "WF" => "Wildfire/forest fire detected.",
        "TS" => "Tsunami warning issued.",
        _ => "Natural disaster event tracked by GDACS.",
    }
}

// ── Transform ──────────────────────────────────────────────────────

/// Convert a GDACS payload into crisis candidates.
///
/// Records that fail to decode or carry no usable coordinates are skipped.
/// Urgency is the provisional alert-level tier.
pub fn transform(payload: GdacsPayload, now: DateTime<Utc>) -> Vec<Crisis> {
    payload
        .into_features()
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| match transform_feature(&feature, index, now) {
            Ok(crisis) => Some(crisis),
            Err(e) => {
                tracing::debug!(index, %e, "skipping malformed GDACS feature");
                None
            }
        })
        .filter(Crisis::has_resolved_location)
        .collect()
}

fn transform_feature(
    feature: &Value,
    index: usize,
    now: DateTime<Utc>,
) -> Result<Crisis, SourceError> {
    let props_value = feature
        .get("properties")
        .filter(|p| p.is_object())
        .unwrap_or(feature);
    let props: GdacsProperties = serde_json::from_value(props_value.clone())?;
    let coordinates = feature
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .map_or(GeoPoint::UNRESOLVED, point_from_coordinates);

    let event_type = props.eventtype.as_deref().unwrap_or_default();
    let alert_level = props.alertlevel.as_deref().unwrap_or_default();
    let event_id = props.eventid.as_ref().and_then(util::value_text);
    let country_key = util::first_text([props.country.as_deref(), props.iso3.as_deref()]);

    let name = util::first_text([props.name.as_deref(), props.eventname.as_deref()])
        .map_or_else(|| build_event_name(&props, event_type), str::to_string);

    let source_url = report_url(props.url.as_ref()).unwrap_or_else(|| {
        format!(
            "https://www.gdacs.org/report.aspx?eventid={}&eventtype={event_type}",
            event_id.as_deref().unwrap_or_default()
        )
    });

    Ok(Crisis {
        id: format!(
            "gdacs-{}",
            event_id.clone().unwrap_or_else(|| index.to_string())
        ),
        name,
        category: category_for(event_type),
        region: lookup::resolve_region(
            props.country.as_deref().unwrap_or_default(),
            props.iso3.as_deref().unwrap_or_default(),
        ),
        country: country_key.unwrap_or("Unknown").to_string(),
        country_code: util::first_text([props.iso3.as_deref()]).map(str::to_string),
        coordinates,
        urgency: provisional_tier(alert_level),
        affected_population: affected_population(&props, alert_level),
        description: build_description(&props, event_type),
        start_date: util::first_text([props.fromdate.as_deref(), props.eventdate.as_deref()])
            .and_then(parse_date),
        last_updated: util::first_text([props.todate.as_deref(), props.datemodified.as_deref()])
            .and_then(parse_timestamp)
            .unwrap_or(now),
        related_charities: Vec::new(),
        source: SourceTag::Gdacs,
        source_url: Some(source_url),
        glide: None,
    })
}

/// GeoJSON `[lng, lat]` pair or a `{lat, lng}` object.
fn point_from_coordinates(coords: &Value) -> GeoPoint {
    let number = |v: Option<&Value>| v.and_then(Value::as_f64).unwrap_or(0.0);
    match coords {
        Value::Array(pair) => GeoPoint::new(number(pair.get(1)), number(pair.first())),
        Value::Object(map) => GeoPoint::new(number(map.get("lat")), number(map.get("lng"))),
        _ => GeoPoint::UNRESOLVED,
    }
}

fn affected_population(props: &GdacsProperties, alert_level: &str) -> u64 {
    let present = [
        props.population.as_ref(),
        props.affectedpopulation.as_ref(),
        props.exposed_population.as_ref(),
        props.severity.as_ref().and_then(|s| s.population.as_ref()),
    ]
    .into_iter()
    .flatten()
    .find(|v| util::is_present(v));

    match present {
        None => estimated_population(alert_level),
        Some(value) => util::parse_population(value).unwrap_or(UNPARSEABLE_POPULATION),
    }
}

fn build_event_name(props: &GdacsProperties, event_type: &str) -> String {
    let location = util::first_text([props.country.as_deref(), props.iso3.as_deref()])
        .unwrap_or_default();
    let magnitude = props
        .severity
        .as_ref()
        .and_then(|s| s.value.as_ref())
        .and_then(util::value_text)
        .map(|v| format!(" (M{v})"))
        .unwrap_or_default();
    format!("{} in {location}{magnitude}", type_name(event_type))
}

fn build_description(props: &GdacsProperties, event_type: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(text) = util::first_text([props.description.as_deref()]) {
        parts.push(text.to_string());
    }
    if let Some(severity) = &props.severity {
        if let Some(value) = severity.value.as_ref().and_then(util::value_text) {
            parts.push(format!("Magnitude: {value}"));
        }
        if let Some(unit) = util::first_text([severity.unit.as_deref()]) {
            parts.push(format!("({unit})"));
        }
    }
    if let Some(level) = util::first_text([props.alertlevel.as_deref()]) {
        parts.push(format!("Alert Level: {level}"));
    }
    if let Some(population) = props
        .population
        .as_ref()
        .filter(|v| util::is_present(v))
        .and_then(util::parse_population)
    {
        parts.push(format!(
            "Estimated population affected: {}",
            util::thousands(population)
        ));
    }

    if parts.is_empty() {
        canned_description(event_type).to_string()
    } else {
        parts.join(" ")
    }
}

/// `url` as a plain string, or the `report` member of a URL object.
fn report_url(url: Option<&Value>) -> Option<String> {
    match url? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("report")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        _ => None,
    }
}

// ── Client ─────────────────────────────────────────────────────────

impl SourceClient {
    /// Fetch the latest GDACS events, direct first, then through the relay.
    ///
    /// # Errors
    ///
    /// Returns the last [`SourceError`] when every strategy failed.
    pub async fn fetch_gdacs(&self) -> Result<Vec<Crisis>, SourceError> {
        let url = format!(
            "{}/Events/geteventlist/latest",
            self.config.gdacs_api.trim_end_matches('/')
        );
        let url = url.as_str();

        let payload: GdacsPayload =
            transport::first_success("gdacs", &self.strategies(), |transport| async move {
                let target = match transport {
                    Transport::Direct => url.to_string(),
                    Transport::Relay => transport::relay_url(&self.config.relay_url, url),
                };
                self.get_json(&target).await
            })
            .await?;

        let crises = transform(payload, Utc::now());
        tracing::info!(count = crises.len(), "GDACS crises");
        Ok(crises)
    }
}
