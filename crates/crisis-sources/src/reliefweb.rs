//! ReliefWeb disaster adapter.

use chrono::{DateTime, Utc};
use crisis_core::dates::{parse_date, parse_timestamp};
use crisis_core::{Crisis, CrisisCategory, GeoPoint, SourceTag, UrgencyTier};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::SourceError;
use crate::transport::{self, Transport};
use crate::{SourceClient, lookup, util};

const FIELDS: [&str; 8] = [
    "name",
    "description",
    "status",
    "country",
    "type",
    "date",
    "glide",
    "primary_country",
];

/// Top-level `/disasters` response. Items are decoded one at a time.
#[derive(Debug, Default, Deserialize)]
pub struct ReliefWebPayload {
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReliefWebItem {
    id: Option<Value>,
    href: Option<String>,
    fields: ReliefWebFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReliefWebFields {
    name: Option<String>,
    description: Option<String>,
    status: Option<String>,
    glide: Option<String>,
    country: Vec<CountryRef>,
    primary_country: Option<CountryRef>,
    #[serde(rename = "type")]
    types: Vec<TypeRef>,
    date: Option<DateRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountryRef {
    name: Option<String>,
    iso3: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypeRef {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DateRef {
    created: Option<String>,
    changed: Option<String>,
}

// ── Keyword tables ─────────────────────────────────────────────────

fn lowercase_types(types: &[TypeRef]) -> Vec<String> {
    types
        .iter()
        .map(|t| t.name.as_deref().unwrap_or_default().to_lowercase())
        .collect()
}

fn any_contains(names: &[String], needles: &[&str]) -> bool {
    names
        .iter()
        .any(|name| needles.iter().any(|needle| name.contains(needle)))
}

fn category_for(names: &[String]) -> CrisisCategory {
    if any_contains(names, &["conflict", "complex"]) {
        CrisisCategory::ArmedConflict
    } else if any_contains(names, &["epidemic", "disease"]) {
        CrisisCategory::DiseaseOutbreak
    } else if any_contains(names, &["famine", "food"]) {
        CrisisCategory::Famine
    } else if any_contains(names, &["refugee", "displacement"]) {
        CrisisCategory::RefugeeCrisis
    } else {
        CrisisCategory::NaturalDisaster
    }
}

fn estimated_population(names: &[String]) -> u64 {
    if any_contains(names, &["complex", "conflict"]) {
        5_000_000
    } else if any_contains(names, &["drought", "famine"]) {
        3_000_000
    } else if any_contains(names, &["flood"]) {
        500_000
    } else if any_contains(names, &["earthquake"]) {
        200_000
    } else if any_contains(names, &["cyclone", "hurricane", "typhoon"]) {
        300_000
    } else {
        100_000
    }
}

fn build_description(fields: &ReliefWebFields) -> String {
    let mut parts = Vec::new();

    let type_names: Vec<&str> = fields
        .types
        .iter()
        .filter_map(|t| t.name.as_deref())
        .collect();
    if !type_names.is_empty() {
        parts.push(format!("Type: {}", type_names.join(", ")));
    }
    if let Some(status) = util::first_text([fields.status.as_deref()]) {
        parts.push(format!("Status: {status}"));
    }
    if let Some(glide) = util::first_text([fields.glide.as_deref()]) {
        parts.push(format!("GLIDE: {glide}"));
    }

    if parts.is_empty() {
        "Humanitarian crisis tracked by ReliefWeb.".to_string()
    } else {
        format!("{}.", parts.join(". "))
    }
}

// ── Transform ──────────────────────────────────────────────────────

/// Convert a ReliefWeb payload into crisis candidates.
///
/// Items whose country resolves to no centroid are excluded; items that fail
/// to decode are skipped.
pub fn transform(payload: ReliefWebPayload, now: DateTime<Utc>) -> Vec<Crisis> {
    let Value::Array(items) = payload.data else {
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<ReliefWebItem>(raw) {
            Ok(item) => Some(transform_item(item, index, now)),
            Err(e) => {
                tracing::debug!(index, %e, "skipping malformed ReliefWeb item");
                None
            }
        })
        .filter(Crisis::has_resolved_location)
        .collect()
}

fn transform_item(item: ReliefWebItem, index: usize, now: DateTime<Utc>) -> Crisis {
    let fields = &item.fields;
    let primary = fields.primary_country.as_ref();
    let first = fields.country.first();

    let country = util::first_text([
        primary.and_then(|c| c.name.as_deref()),
        first.and_then(|c| c.name.as_deref()),
    ])
    .unwrap_or("Unknown");
    let iso3 = util::first_text([
        primary.and_then(|c| c.iso3.as_deref()),
        first.and_then(|c| c.iso3.as_deref()),
    ])
    .unwrap_or_default();

    let type_names = lowercase_types(&fields.types);
    let id = item
        .id
        .as_ref()
        .and_then(util::value_text)
        .unwrap_or_else(|| index.to_string());
    let date = fields.date.as_ref();

    Crisis {
        id: format!("reliefweb-{id}"),
        name: util::first_text([fields.name.as_deref()])
            .unwrap_or("Unknown Disaster")
            .to_string(),
        category: category_for(&type_names),
        region: lookup::resolve_region(country, iso3),
        country: country.to_string(),
        country_code: (!iso3.is_empty()).then(|| iso3.to_uppercase()),
        coordinates: lookup::resolve_centroid(iso3, country).unwrap_or(GeoPoint::UNRESOLVED),
        urgency: UrgencyTier::HIGH,
        affected_population: estimated_population(&type_names),
        description: util::first_text([fields.description.as_deref()])
            .map_or_else(|| build_description(fields), str::to_string),
        start_date: date
            .and_then(|d| d.created.as_deref())
            .and_then(parse_date),
        last_updated: date
            .and_then(|d| d.changed.as_deref())
            .and_then(parse_timestamp)
            .unwrap_or(now),
        related_charities: Vec::new(),
        source: SourceTag::ReliefWeb,
        source_url: Some(
            util::first_text([item.href.as_deref()])
                .map_or_else(|| format!("https://reliefweb.int/disaster/{id}"), str::to_string),
        ),
        glide: util::first_text([fields.glide.as_deref()]).map(str::to_string),
    }
}

// ── Client ─────────────────────────────────────────────────────────

impl SourceClient {
    /// Fetch ongoing ReliefWeb disasters: a direct POST with a JSON query
    /// body, then a GET with query parameters through the relay.
    ///
    /// # Errors
    ///
    /// Returns the last [`SourceError`] when every strategy failed.
    pub async fn fetch_reliefweb(&self) -> Result<Vec<Crisis>, SourceError> {
        let base = format!(
            "{}/disasters?appname={}",
            self.config.reliefweb_api.trim_end_matches('/'),
            urlencoding::encode(&self.config.reliefweb_appname)
        );
        let limit = self.config.reliefweb_limit;
        let get_url = format!("{base}&filter[field]=status&filter[value]=ongoing&limit={limit}");
        let body = request_body(limit);
        let (base, get_url, body) = (base.as_str(), get_url.as_str(), &body);

        let payload: ReliefWebPayload =
            transport::first_success("reliefweb", &self.strategies(), |transport| async move {
                match transport {
                    Transport::Direct => self.post_json(base, body).await,
                    Transport::Relay => {
                        self.get_json(&transport::relay_url(&self.config.relay_url, get_url))
                            .await
                    }
                }
            })
            .await?;

        let crises = transform(payload, Utc::now());
        tracing::info!(count = crises.len(), "ReliefWeb crises");
        Ok(crises)
    }
}

fn request_body(limit: u32) -> Value {
    json!({
        "filter": { "field": "status", "value": "ongoing" },
        "fields": { "include": FIELDS },
        "limit": limit,
        "sort": ["date.created:desc"],
    })
}
