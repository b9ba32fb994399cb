use crisis_core::{CrisisCategory, FilterState, Region, UrgencyTier};
use crisis_engine::PipelineRun;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_values;
use crate::commands::shared::rows::CrisisRow;
use crate::output::output;

/// Translate list flags into a filter; unset flags keep the default selection.
fn build_filter(args: &ListArgs) -> anyhow::Result<FilterState> {
    let mut state = FilterState::default();

    if !args.categories.is_empty() {
        state = state.with_categories(parse_values::<CrisisCategory>(&args.categories, "category")?);
    }
    if !args.regions.is_empty() {
        state = state.with_regions(parse_values::<Region>(&args.regions, "region")?);
    }

    let min = args.urgency_min.map_or(UrgencyTier::MIN, UrgencyTier::saturating);
    let max = args.urgency_max.map_or(UrgencyTier::MAX, UrgencyTier::saturating);
    Ok(state.with_urgency(min, max))
}

/// Handle `crisismap list`.
pub fn handle(args: &ListArgs, run: &PipelineRun, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = run.filtered(&build_filter(args)?);

    let mut crises = view.crises;
    if args.top_only {
        crises.retain(|crisis| view.highlighted.contains(&crisis.id));
    }
    apply_limit(&mut crises, flags.limit);

    if flags.format == OutputFormat::Table {
        let rows = crises
            .iter()
            .map(|crisis| CrisisRow::new(crisis, run.is_highlighted(&crisis.id)))
            .collect::<Vec<_>>();
        return output(&rows, flags.format);
    }
    output(&crises, flags.format)
}
