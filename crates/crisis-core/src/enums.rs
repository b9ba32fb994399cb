//! Category, region, urgency, and source enumerations.
//!
//! Categories and regions serialize to the identifiers used by the embedded data
//! files and the local cache (`conflict`, `natural_disaster`, `middle_east`, ...).
//! Each enum carries its fixed presentation table (label, color, bounds) so the
//! presentation layer never needs a second lookup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CrisisCategory
// ---------------------------------------------------------------------------

/// Kind of humanitarian crisis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum CrisisCategory {
    #[serde(rename = "conflict")]
    ArmedConflict,
    #[serde(rename = "natural_disaster")]
    NaturalDisaster,
    #[serde(rename = "famine")]
    Famine,
    #[serde(rename = "disease")]
    DiseaseOutbreak,
    #[serde(rename = "refugee")]
    RefugeeCrisis,
}

impl CrisisCategory {
    pub const ALL: [Self; 5] = [
        Self::ArmedConflict,
        Self::NaturalDisaster,
        Self::Famine,
        Self::DiseaseOutbreak,
        Self::RefugeeCrisis,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArmedConflict => "conflict",
            Self::NaturalDisaster => "natural_disaster",
            Self::Famine => "famine",
            Self::DiseaseOutbreak => "disease",
            Self::RefugeeCrisis => "refugee",
        }
    }

    /// Human-readable label shown in legends and filter panels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ArmedConflict => "Armed Conflict",
            Self::NaturalDisaster => "Natural Disaster",
            Self::Famine => "Famine",
            Self::DiseaseOutbreak => "Disease Outbreak",
            Self::RefugeeCrisis => "Refugee Crisis",
        }
    }

    /// Marker color as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::ArmedConflict => "#E53935",
            Self::NaturalDisaster => "#FF9800",
            Self::Famine => "#795548",
            Self::DiseaseOutbreak => "#9C27B0",
            Self::RefugeeCrisis => "#2196F3",
        }
    }

    /// Categories the network sources under-report; embedded records of these
    /// kinds are merged in alongside live data.
    #[must_use]
    pub const fn is_supplemented_by_fallback(self) -> bool {
        matches!(self, Self::ArmedConflict | Self::RefugeeCrisis)
    }
}

impl fmt::Display for CrisisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrisisCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "conflict" | "armed_conflict" => Ok(Self::ArmedConflict),
            "natural_disaster" | "disaster" => Ok(Self::NaturalDisaster),
            "famine" => Ok(Self::Famine),
            "disease" | "disease_outbreak" => Ok(Self::DiseaseOutbreak),
            "refugee" | "refugee_crisis" => Ok(Self::RefugeeCrisis),
            other => Err(CoreError::Validation(format!(
                "unknown crisis category '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Continental or geopolitical bucket used for grouping and highlighting.
///
/// `Global` is the bucket for countries the lookup tables cannot place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Africa,
    Asia,
    Europe,
    MiddleEast,
    Americas,
    Oceania,
    Global,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::MiddleEast,
        Self::Americas,
        Self::Oceania,
        Self::Global,
    ];

    /// Regions selectable in the filter panel. `Global` is not one of them.
    pub const GEOGRAPHIC: [Self; 6] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::MiddleEast,
        Self::Americas,
        Self::Oceania,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::MiddleEast => "middle_east",
            Self::Americas => "americas",
            Self::Oceania => "oceania",
            Self::Global => "global",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::MiddleEast => "Middle East",
            Self::Americas => "Americas",
            Self::Oceania => "Oceania",
            Self::Global => "Global",
        }
    }

    /// Map viewport as `[[south, west], [north, east]]`.
    #[must_use]
    pub const fn bounds(self) -> [[f64; 2]; 2] {
        match self {
            Self::Africa => [[-35.0, -20.0], [37.0, 55.0]],
            Self::Asia => [[-10.0, 25.0], [55.0, 180.0]],
            Self::Europe => [[35.0, -25.0], [72.0, 65.0]],
            Self::MiddleEast => [[12.0, 25.0], [45.0, 65.0]],
            Self::Americas => [[-55.0, -170.0], [70.0, -30.0]],
            Self::Oceania => [[-50.0, 110.0], [0.0, 180.0]],
            Self::Global => [[-90.0, -180.0], [90.0, 180.0]],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown region '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// UrgencyTier
// ---------------------------------------------------------------------------

/// Relative severity rank, 1 (lowest) to 5 (highest).
///
/// Tiers only mean something inside the batch they were computed for; the
/// ranking engine overwrites whatever an adapter put here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct UrgencyTier(u8);

impl UrgencyTier {
    pub const MONITORING: Self = Self(1);
    pub const ELEVATED: Self = Self(2);
    pub const HIGH: Self = Self(3);
    pub const SEVERE: Self = Self(4);
    pub const CRITICAL: Self = Self(5);

    pub const MIN: Self = Self::MONITORING;
    pub const MAX: Self = Self::CRITICAL;

    /// Build a tier from a raw level, rejecting anything outside `1..=5`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= 5 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Build a tier, clamping out-of-range levels into `1..=5`.
    #[must_use]
    pub const fn saturating(level: u8) -> Self {
        if level < 1 {
            Self::MIN
        } else if level > 5 {
            Self::MAX
        } else {
            Self(level)
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Monitoring",
            2 => "Elevated",
            3 => "High",
            4 => "Severe",
            _ => "Critical",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self.0 {
            1 => "#FFEB3B",
            2 => "#FFC107",
            3 => "#FF9800",
            4 => "#FF5722",
            _ => "#F44336",
        }
    }

    /// Heat-layer weight in `0.2..=1.0`.
    #[must_use]
    pub fn intensity(self) -> f64 {
        f64::from(self.0) / 5.0
    }
}

impl TryFrom<u8> for UrgencyTier {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
            .ok_or_else(|| CoreError::Validation(format!("urgency tier {level} outside 1..=5")))
    }
}

impl From<UrgencyTier> for u8 {
    fn from(tier: UrgencyTier) -> Self {
        tier.0
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SourceTag
// ---------------------------------------------------------------------------

/// Origin of a crisis record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SourceTag {
    #[serde(rename = "GDACS")]
    Gdacs,
    #[serde(rename = "ReliefWeb")]
    ReliefWeb,
    #[serde(rename = "Embedded")]
    Embedded,
}

impl SourceTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdacs => "GDACS",
            Self::ReliefWeb => "ReliefWeb",
            Self::Embedded => "Embedded",
        }
    }

    /// Whether records with this tag came over the network.
    #[must_use]
    pub const fn is_network(self) -> bool {
        !matches!(self, Self::Embedded)
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
