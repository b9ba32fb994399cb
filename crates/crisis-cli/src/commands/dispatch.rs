use anyhow::Context;
use crisis_config::CrisisMapConfig;
use crisis_engine::CrisisPipeline;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::commands::shared::run::run_pipeline;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &CrisisMapConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Commands::Cache { action } = &command {
        return commands::cache::handle(action, config, flags);
    }

    tracing::debug!(?command, "dispatching command");
    let pipeline =
        CrisisPipeline::from_config(config).context("failed to initialize crisis pipeline")?;

    match command {
        Commands::Load => {
            commands::load::handle(&run_pipeline(&pipeline, false, flags).await?, flags)
        }
        Commands::Refresh => {
            commands::load::handle(&run_pipeline(&pipeline, true, flags).await?, flags)
        }
        Commands::List(args) => {
            commands::list::handle(&args, &run_pipeline(&pipeline, false, flags).await?, flags)
        }
        Commands::Show(args) => {
            let run = run_pipeline(&pipeline, false, flags).await?;
            commands::show::handle(&args, &run, pipeline.catalog(), flags)
        }
        Commands::Top(args) => {
            commands::top::handle(&args, &run_pipeline(&pipeline, false, flags).await?, flags)
        }
        Commands::Heat => {
            commands::heat::handle(&run_pipeline(&pipeline, false, flags).await?, flags)
        }
        Commands::Charities(args) => commands::charities::handle(&args, pipeline.catalog(), flags),
        Commands::Cache { .. } | Commands::Schema(_) => {
            unreachable!("cache/schema are pre-dispatched")
        }
    }
}
