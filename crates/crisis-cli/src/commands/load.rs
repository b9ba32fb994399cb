use std::collections::BTreeMap;

use crisis_engine::{DataStatus, PipelineRun};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoadSummary {
    #[serde(flatten)]
    status: DataStatus,
    note: String,
    total: usize,
    highlighted: usize,
    by_type: BTreeMap<&'static str, usize>,
    by_region: BTreeMap<&'static str, usize>,
}

fn summarize(run: &PipelineRun) -> LoadSummary {
    let mut by_type = BTreeMap::new();
    let mut by_region = BTreeMap::new();
    for crisis in run.all() {
        *by_type.entry(crisis.category.as_str()).or_insert(0) += 1;
        *by_region.entry(crisis.region.as_str()).or_insert(0) += 1;
    }

    LoadSummary {
        status: run.status(),
        note: run.note(),
        total: run.len(),
        highlighted: run.highlighted().len(),
        by_type,
        by_region,
    }
}

/// Handle `crisismap load` and `crisismap refresh`.
pub fn handle(run: &PipelineRun, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&summarize(run), flags.format)
}
