use crisis_core::{Crisis, Region};
use crisis_engine::PipelineRun;

use crate::cli::root_commands::TopArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_value;
use crate::commands::shared::rows::CrisisRow;
use crate::output::output;

fn top_crises<'a>(run: &'a PipelineRun, region: Option<Region>) -> Vec<&'a Crisis> {
    let mut crises = run.highlighted_crises();
    if let Some(region) = region {
        crises.retain(|crisis| crisis.region == region);
    }
    crises
}

/// Handle `crisismap top`.
pub fn handle(args: &TopArgs, run: &PipelineRun, flags: &GlobalFlags) -> anyhow::Result<()> {
    let region = args
        .region
        .as_deref()
        .map(|raw| parse_value::<Region>(raw, "region"))
        .transpose()?;

    let mut crises = top_crises(run, region);
    apply_limit(&mut crises, flags.limit);

    if flags.format == OutputFormat::Table {
        let rows = crises
            .iter()
            .map(|crisis| CrisisRow::new(crisis, true))
            .collect::<Vec<_>>();
        return output(&rows, flags.format);
    }
    output(&crises, flags.format)
}
