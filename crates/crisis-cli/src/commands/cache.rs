use crisis_cache::Cache;
use crisis_config::CrisisMapConfig;
use serde::Serialize;

use crate::cli::{CacheCommands, GlobalFlags};
use crate::output::output;

#[derive(Debug, Serialize)]
struct CacheCleared {
    cleared: bool,
    dir: Option<String>,
}

/// Handle `crisismap cache`.
pub fn handle(
    action: &CacheCommands,
    config: &CrisisMapConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CacheCommands::Clear => {
            Cache::from_config(&config.cache).clear();
            let response = CacheCleared {
                cleared: true,
                dir: config
                    .cache
                    .resolved_dir()
                    .map(|dir| dir.display().to_string()),
            };
            output(&response, flags.format)
        }
    }
}
