//! Static country tables: ISO3 code and names to an approximate centroid and a
//! region bucket.
//!
//! Keys match case-insensitively against the ISO3 code, the primary name, and
//! any alias. Some countries carry a region but no centroid; records placed
//! there by a network source stay unresolved and are dropped.

use crisis_core::{GeoPoint, Region};

/// One row of the country table.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub iso3: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub centroid: Option<GeoPoint>,
    pub region: Region,
}

macro_rules! country {
    ($iso:literal, $name:literal, [$($alias:literal),*], $lat:literal, $lng:literal, $region:ident) => {
        Country {
            iso3: $iso,
            name: $name,
            aliases: &[$($alias),*],
            centroid: Some(GeoPoint::new($lat, $lng)),
            region: Region::$region,
        }
    };
    ($iso:literal, $name:literal, [$($alias:literal),*], $region:ident) => {
        Country {
            iso3: $iso,
            name: $name,
            aliases: &[$($alias),*],
            centroid: None,
            region: Region::$region,
        }
    };
}

static COUNTRIES: &[Country] = &[
    // Africa
    country!("ETH", "Ethiopia", [], 9.145, 40.489, Africa),
    country!("SDN", "Sudan", [], 15.5, 32.5, Africa),
    country!("SSD", "South Sudan", [], 6.877, 31.307, Africa),
    country!("SOM", "Somalia", [], 5.152, 46.199, Africa),
    country!("NGA", "Nigeria", [], 9.082, 8.675, Africa),
    country!(
        "COD",
        "Democratic Republic of the Congo",
        ["DRC", "Democratic Republic of Congo"],
        -4.038,
        21.758,
        Africa
    ),
    country!("COG", "Congo", [], Africa),
    country!("KEN", "Kenya", [], -0.023, 37.906, Africa),
    country!("MLI", "Mali", [], 17.570, -3.996, Africa),
    country!("NER", "Niger", [], 17.607, 8.081, Africa),
    country!("BFA", "Burkina Faso", [], 12.238, -1.561, Africa),
    country!("TCD", "Chad", [], 15.454, 18.732, Africa),
    country!("CAF", "Central African Republic", ["CAR"], 6.611, 20.939, Africa),
    country!("MOZ", "Mozambique", [], -18.665, 35.529, Africa),
    country!("MDG", "Madagascar", [], -18.766, 46.869, Africa),
    country!("ZWE", "Zimbabwe", [], -19.015, 29.154, Africa),
    country!("MWI", "Malawi", [], -13.254, 34.301, Africa),
    country!("UGA", "Uganda", [], 1.373, 32.290, Africa),
    country!("CMR", "Cameroon", [], 7.370, 12.354, Africa),
    country!("ZAF", "South Africa", [], Africa),
    country!("MAR", "Morocco", [], Africa),
    country!("LBY", "Libya", [], Africa),
    country!("EGY", "Egypt", [], Africa),
    // Middle East
    country!("YEM", "Yemen", [], 15.552, 48.516, MiddleEast),
    country!("SYR", "Syria", ["Syrian Arab Republic"], 34.802, 38.996, MiddleEast),
    country!("IRQ", "Iraq", [], 33.223, 43.679, MiddleEast),
    country!("LBN", "Lebanon", [], 33.854, 35.862, MiddleEast),
    country!(
        "PSE",
        "Palestine",
        ["occupied Palestinian territory", "State of Palestine"],
        31.952,
        35.233,
        MiddleEast
    ),
    country!("JOR", "Jordan", [], 30.585, 36.238, MiddleEast),
    country!("TUR", "Turkey", ["Türkiye"], 38.963, 35.243, MiddleEast),
    country!("IRN", "Iran", ["Iran (Islamic Republic of)"], 32.427, 53.688, MiddleEast),
    country!("ISR", "Israel", [], MiddleEast),
    country!("SAU", "Saudi Arabia", [], MiddleEast),
    // Asia
    country!("AFG", "Afghanistan", [], 33.939, 67.709, Asia),
    country!("PAK", "Pakistan", [], 30.375, 69.345, Asia),
    country!("BGD", "Bangladesh", [], 23.685, 90.356, Asia),
    country!("MMR", "Myanmar", [], 21.913, 95.956, Asia),
    country!("PHL", "Philippines", [], 12.879, 121.774, Asia),
    country!("IDN", "Indonesia", [], -0.789, 113.921, Asia),
    country!("NPL", "Nepal", [], 28.394, 84.124, Asia),
    country!("IND", "India", [], 20.593, 78.962, Asia),
    country!("LKA", "Sri Lanka", [], 7.873, 80.771, Asia),
    country!("THA", "Thailand", [], 15.870, 100.992, Asia),
    country!("VNM", "Viet Nam", ["Vietnam"], 14.058, 108.277, Asia),
    country!("CHN", "China", [], 35.861, 104.195, Asia),
    country!("JPN", "Japan", [], 36.204, 138.252, Asia),
    country!("MYS", "Malaysia", [], Asia),
    country!("KHM", "Cambodia", [], Asia),
    country!("LAO", "Laos", [], Asia),
    // Americas
    country!("HTI", "Haiti", [], 18.971, -72.285, Americas),
    country!("VEN", "Venezuela", [], 6.423, -66.589, Americas),
    country!("COL", "Colombia", [], 4.570, -74.297, Americas),
    country!("GTM", "Guatemala", [], 15.783, -90.230, Americas),
    country!("HND", "Honduras", [], 15.199, -86.241, Americas),
    country!("SLV", "El Salvador", [], 13.794, -88.896, Americas),
    country!("MEX", "Mexico", [], 23.634, -102.552, Americas),
    country!(
        "USA",
        "United States",
        ["United States of America"],
        37.090,
        -95.712,
        Americas
    ),
    country!("BRA", "Brazil", [], -14.235, -51.925, Americas),
    country!("PER", "Peru", [], -9.189, -75.015, Americas),
    country!("BOL", "Bolivia", [], -16.290, -63.588, Americas),
    country!("ECU", "Ecuador", [], -1.831, -78.183, Americas),
    country!("CHL", "Chile", [], -35.675, -71.543, Americas),
    country!("ARG", "Argentina", [], -38.416, -63.616, Americas),
    country!("CUB", "Cuba", [], 21.521, -77.781, Americas),
    country!("JAM", "Jamaica", [], 18.109, -77.297, Americas),
    country!("NIC", "Nicaragua", [], 12.865, -85.207, Americas),
    // Europe
    country!("UKR", "Ukraine", [], 48.379, 31.165, Europe),
    country!("GRC", "Greece", [], 39.074, 21.824, Europe),
    country!("ITA", "Italy", [], 41.871, 12.567, Europe),
    country!("ESP", "Spain", [], 40.463, -3.749, Europe),
    country!("FRA", "France", [], 46.227, 2.213, Europe),
    country!("DEU", "Germany", [], 51.165, 10.451, Europe),
    country!("POL", "Poland", [], 51.919, 19.145, Europe),
    country!("ROU", "Romania", [], 45.943, 24.966, Europe),
    // Oceania
    country!("TON", "Tonga", [], -21.178, -175.198, Oceania),
    country!("VUT", "Vanuatu", [], -15.376, 166.959, Oceania),
    country!("FJI", "Fiji", [], -17.713, 178.065, Oceania),
    country!("PNG", "Papua New Guinea", [], -6.314, 143.955, Oceania),
    country!("AUS", "Australia", [], -25.274, 133.775, Oceania),
    country!("NZL", "New Zealand", [], -40.900, 174.886, Oceania),
];

impl Country {
    fn matches(&self, key: &str) -> bool {
        self.iso3.eq_ignore_ascii_case(key)
            || self.name.to_lowercase() == key.to_lowercase()
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == key.to_lowercase())
    }
}

/// Every row, in table order.
pub fn countries() -> &'static [Country] {
    COUNTRIES
}

/// Find a country by ISO3 code, name, or alias.
pub fn find(key: &str) -> Option<&'static Country> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|c| c.matches(key))
}

/// Approximate centroid for a country key, if the table has one.
pub fn centroid(key: &str) -> Option<GeoPoint> {
    find(key).and_then(|c| c.centroid)
}

/// Region bucket for a country key.
pub fn region(key: &str) -> Option<Region> {
    find(key).map(|c| c.region)
}

/// Resolve a region from a country name, falling back to the ISO3 code and
/// finally to [`Region::Global`].
pub fn resolve_region(name: &str, iso3: &str) -> Region {
    region(name).or_else(|| region(iso3)).unwrap_or(Region::Global)
}

/// Centroid by ISO3 code, falling back to the country name.
pub fn resolve_centroid(iso3: &str, name: &str) -> Option<GeoPoint> {
    centroid(iso3).or_else(|| centroid(name))
}
