//! # crisis-config
//!
//! Layered configuration loading for CrisisMap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CRISISMAP_*` prefix, `__` as separator)
//! 2. Project-level `.crisismap/config.toml`
//! 3. User-level `~/.config/crisismap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CRISISMAP_SOURCES__RELAY_URL` -> `sources.relay_url`,
//! `CRISISMAP_CACHE__TTL_MS` -> `cache.ttl_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use crisis_config::CrisisMapConfig;
//!
//! let config = CrisisMapConfig::load_with_dotenv().expect("config");
//! if !config.sources.use_live_sources {
//!     println!("local mode");
//! }
//! ```

mod cache;
mod charities;
mod error;
mod ranking;
mod sources;

pub use cache::CacheConfig;
pub use charities::CharitiesConfig;
pub use error::ConfigError;
pub use ranking::RankingConfig;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrisisMapConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub charities: CharitiesConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl CrisisMapConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a layer cannot be parsed, or
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".crisismap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CRISISMAP_").split("__"))
    }

    /// Reject values that would make the pipeline misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.request_timeout_secs == 0 {
            return Err(invalid("sources.request_timeout_secs", "must be at least 1"));
        }
        if self.sources.use_live_sources {
            if self.sources.gdacs_api.trim().is_empty() {
                return Err(invalid("sources.gdacs_api", "must not be empty"));
            }
            if self.sources.reliefweb_api.trim().is_empty() {
                return Err(invalid("sources.reliefweb_api", "must not be empty"));
            }
        }
        if !(1..=5).contains(&self.charities.min_rating) {
            return Err(invalid("charities.min_rating", "must be between 1 and 5"));
        }
        if self.ranking.top_per_region == 0 {
            return Err(invalid("ranking.top_per_region", "must be at least 1"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crisismap").join("config.toml"))
    }

    /// Walk up from `CARGO_MANIFEST_DIR` looking for `.env`, then try the
    /// current directory. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
