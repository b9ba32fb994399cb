//! Heat-layer points for the map.

use crisis_core::Crisis;
use serde::Serialize;

/// One weighted point; `intensity` is `tier / 5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

pub fn heat_points(crises: &[Crisis]) -> Vec<HeatPoint> {
    crises
        .iter()
        .map(|c| HeatPoint {
            lat: c.coordinates.lat,
            lng: c.coordinates.lng,
            intensity: c.urgency.intensity(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::crisis;
    use crisis_core::{Region, UrgencyTier};

    #[test]
    fn intensity_is_tier_over_five() {
        let crises = vec![
            Crisis {
                urgency: UrgencyTier::CRITICAL,
                ..crisis("a", Region::Asia, 1)
            },
            Crisis {
                urgency: UrgencyTier::ELEVATED,
                ..crisis("b", Region::Asia, 1)
            },
        ];
        let points = heat_points(&crises);
        assert_eq!(points.len(), 2);
        assert!((points[0].intensity - 1.0).abs() < f64::EPSILON);
        assert!((points[1].intensity - 0.4).abs() < f64::EPSILON);
        assert!((points[0].lat - 10.0).abs() < f64::EPSILON);
        assert!((points[0].lng - 20.0).abs() < f64::EPSILON);
    }
}
