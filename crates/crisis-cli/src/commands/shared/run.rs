use anyhow::Context;
use crisis_engine::{CrisisPipeline, DataStatus, PipelineRun};
use crisis_sources::SourceClient;

use crate::cli::GlobalFlags;
use crate::progress::Progress;
use crate::ui;

/// Run the pipeline behind a spinner. `refresh` discards the cache first.
///
/// A degraded run (sample data) always carries its note to stderr, either
/// through the spinner or as a plain line when no spinner is drawn.
pub async fn run_pipeline(
    pipeline: &CrisisPipeline<SourceClient>,
    refresh: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<PipelineRun> {
    let spinner = Progress::spinner(if refresh {
        "Refreshing crisis sources"
    } else {
        "Loading crises"
    });

    let result = if refresh {
        pipeline.refresh().await
    } else {
        pipeline.load().await
    };

    match &result {
        Ok(run) => {
            spinner.finish_ok(&run.note());
            if let Some(note) = degraded_note(run.status(), flags.quiet, ui::prefs().progress) {
                eprintln!("{note}");
            }
        }
        Err(_) => spinner.finish_err("Failed to load crisis data"),
    }
    result.context("failed to load crisis data")
}

/// Stderr line for a degraded run when the spinner did not already show it.
fn degraded_note(status: DataStatus, quiet: bool, spinner_shown: bool) -> Option<String> {
    (status.is_degraded() && !quiet && !spinner_shown).then(|| format!("note: {}", status.note()))
}

#[cfg(test)]
mod tests {
    use crisis_engine::DataStatus;
    use pretty_assertions::assert_eq;

    use super::degraded_note;

    #[test]
    fn outage_prints_note_without_spinner() {
        assert_eq!(
            degraded_note(DataStatus::Sample, false, false).as_deref(),
            Some("note: Using sample data")
        );
        assert_eq!(
            degraded_note(DataStatus::SampleOnly, false, false).as_deref(),
            Some("note: Local mode - using sample data")
        );
    }

    #[test]
    fn live_and_cached_runs_stay_silent() {
        assert_eq!(degraded_note(DataStatus::Live { count: 3 }, false, false), None);
        assert_eq!(degraded_note(DataStatus::Cached, false, false), None);
    }

    #[test]
    fn quiet_or_spinner_suppresses_note() {
        assert_eq!(degraded_note(DataStatus::Sample, true, false), None);
        assert_eq!(degraded_note(DataStatus::Sample, false, true), None);
    }
}
