use crisis_core::{Charity, CoreError, Crisis};
use crisis_engine::{CharityCatalog, PipelineRun};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CrisisDetail<'a> {
    #[serde(flatten)]
    crisis: &'a Crisis,
    urgency_label: &'static str,
    highlighted: bool,
    charities: Vec<&'a Charity>,
}

fn detail<'a>(
    id: &str,
    run: &'a PipelineRun,
    catalog: &'a CharityCatalog,
) -> Result<CrisisDetail<'a>, CoreError> {
    let crisis = run.by_id(id).ok_or_else(|| CoreError::NotFound {
        entity_type: "crisis".to_string(),
        id: id.to_string(),
    })?;

    Ok(CrisisDetail {
        crisis,
        urgency_label: crisis.urgency.label(),
        highlighted: run.is_highlighted(&crisis.id),
        charities: catalog.for_crisis(crisis),
    })
}

/// Handle `crisismap show`.
pub fn handle(
    args: &ShowArgs,
    run: &PipelineRun,
    catalog: &CharityCatalog,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&detail(&args.id, run, catalog)?, flags.format)
}
