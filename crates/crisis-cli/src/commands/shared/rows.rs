use crisis_core::Crisis;
use serde::Serialize;

/// Flat view of a crisis for table output.
#[derive(Debug, Serialize)]
pub struct CrisisRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub category: &'static str,
    pub region: &'static str,
    pub country: &'a str,
    pub tier: u8,
    pub urgency: &'static str,
    pub population: u64,
    pub top: bool,
}

impl<'a> CrisisRow<'a> {
    pub fn new(crisis: &'a Crisis, highlighted: bool) -> Self {
        Self {
            id: &crisis.id,
            name: &crisis.name,
            category: crisis.category.as_str(),
            region: crisis.region.as_str(),
            country: &crisis.country,
            tier: crisis.urgency.level(),
            urgency: crisis.urgency.label(),
            population: crisis.affected_population,
            top: highlighted,
        }
    }
}
