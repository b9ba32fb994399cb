use crisis_engine::PipelineRun;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::output::output;

/// Handle `crisismap heat`.
pub fn handle(run: &PipelineRun, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut points = run.heat_points();
    apply_limit(&mut points, flags.limit);
    output(&points, flags.format)
}
