//! Stateless view over a ranked batch.

use std::collections::HashSet;

use crisis_core::{Crisis, FilterState};

pub fn matches(state: &FilterState, crisis: &Crisis) -> bool {
    state.categories.contains(&crisis.category)
        && state.regions.contains(&crisis.region)
        && state.urgency_min <= crisis.urgency
        && crisis.urgency <= state.urgency_max
}

/// Records passing every selection, in input order.
pub fn apply(crises: &[Crisis], state: &FilterState) -> Vec<Crisis> {
    crises
        .iter()
        .filter(|c| matches(state, c))
        .cloned()
        .collect()
}

/// Highlighted ids restricted to the visible records, in highlight order.
pub fn visible_highlights(highlighted: &[String], visible: &[Crisis]) -> Vec<String> {
    let ids: HashSet<&str> = visible.iter().map(|c| c.id.as_str()).collect();
    highlighted
        .iter()
        .filter(|id| ids.contains(id.as_str()))
        .cloned()
        .collect()
}
