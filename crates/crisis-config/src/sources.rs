//! Upstream source configuration: endpoints, relay, timeouts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_use_live_sources() -> bool {
    true
}

fn default_gdacs_api() -> String {
    "https://www.gdacs.org/gdacsapi/api".to_string()
}

fn default_reliefweb_api() -> String {
    "https://api.reliefweb.int/v2".to_string()
}

fn default_reliefweb_appname() -> String {
    "crisismap".to_string()
}

/// The relay prefix; the percent-encoded target URL is appended to it.
fn default_relay_url() -> String {
    "https://corsproxy.io/?".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    15
}

const fn default_reliefweb_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// When false, only the embedded dataset is used and no request is made.
    #[serde(default = "default_use_live_sources")]
    pub use_live_sources: bool,

    /// GDACS API base URL (no trailing slash).
    #[serde(default = "default_gdacs_api")]
    pub gdacs_api: String,

    /// ReliefWeb API base URL (no trailing slash).
    #[serde(default = "default_reliefweb_api")]
    pub reliefweb_api: String,

    /// Application name sent to ReliefWeb as `appname`.
    #[serde(default = "default_reliefweb_appname")]
    pub reliefweb_appname: String,

    /// Relay prefix used when a direct request fails. Empty disables the relay.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Page size requested from ReliefWeb.
    #[serde(default = "default_reliefweb_limit")]
    pub reliefweb_limit: u32,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            use_live_sources: default_use_live_sources(),
            gdacs_api: default_gdacs_api(),
            reliefweb_api: default_reliefweb_api(),
            reliefweb_appname: default_reliefweb_appname(),
            relay_url: default_relay_url(),
            request_timeout_secs: default_request_timeout_secs(),
            reliefweb_limit: default_reliefweb_limit(),
        }
    }
}

impl SourcesConfig {
    /// Whether a relay fallback should be attempted after a direct failure.
    pub fn has_relay(&self) -> bool {
        !self.relay_url.trim().is_empty()
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
