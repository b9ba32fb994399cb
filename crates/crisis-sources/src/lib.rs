//! # crisis-sources
//!
//! Upstream crisis sources for CrisisMap.
//!
//! Each source adapter turns its own raw payload into canonical
//! [`Crisis`](crisis_core::Crisis) candidates:
//! - GDACS natural-hazard events ([`gdacs`])
//! - ReliefWeb ongoing disasters ([`reliefweb`])
//! - the embedded fallback dataset ([`embedded`])
//!
//! Network sources go through an ordered list of [`transport::Transport`]
//! strategies (direct, then relay). Country centroids and region buckets come
//! from [`lookup`].

pub mod embedded;
pub mod gdacs;
pub mod lookup;
pub mod reliefweb;
pub mod transport;

mod error;
mod http;
mod util;

pub use error::SourceError;

use crisis_config::SourcesConfig;
use crisis_core::Crisis;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::check_response;
use crate::transport::Transport;

// ── Types ──────────────────────────────────────────────────────────

/// Candidates from one concurrent fetch of every network source.
///
/// A failed source contributes an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBatch {
    pub gdacs: Vec<Crisis>,
    pub reliefweb: Vec<Crisis>,
}

impl SourceBatch {
    pub fn len(&self) -> usize {
        self.gdacs.len() + self.reliefweb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gdacs.is_empty() && self.reliefweb.is_empty()
    }

    /// All network candidates, GDACS first.
    pub fn into_network(self) -> Vec<Crisis> {
        let mut all = self.gdacs;
        all.extend(self.reliefweb);
        all
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the network crisis sources.
pub struct SourceClient {
    http: reqwest::Client,
    config: SourcesConfig,
}

impl SourceClient {
    /// Build a client with the configured user agent and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &SourcesConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("crisismap/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Fetch every network source concurrently.
    ///
    /// Individual source failures are logged and treated as empty results;
    /// one failing source never fails or blocks the other.
    pub async fn fetch_all(&self) -> SourceBatch {
        let (gdacs, reliefweb) = tokio::join!(self.fetch_gdacs(), self.fetch_reliefweb());

        let unwrap_or_log = |result: Result<Vec<Crisis>, SourceError>, source: &str| {
            result.unwrap_or_else(|e| {
                tracing::warn!(source, %e, "source fetch failed");
                Vec::new()
            })
        };

        SourceBatch {
            gdacs: unwrap_or_log(gdacs, "gdacs"),
            reliefweb: unwrap_or_log(reliefweb, "reliefweb"),
        }
    }

    /// Direct first, then the relay when one is configured.
    fn strategies(&self) -> Vec<Transport> {
        if self.config.has_relay() {
            vec![Transport::Direct, Transport::Relay]
        } else {
            vec![Transport::Direct]
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, SourceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp = check_response(self.http.post(url).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crisis(id: &str) -> Crisis {
        let mut c = embedded::crises().unwrap().remove(0);
        c.id = id.to_string();
        c
    }

    #[test]
    fn batch_concatenates_gdacs_first() {
        let batch = SourceBatch {
            gdacs: vec![crisis("gdacs-1")],
            reliefweb: vec![crisis("reliefweb-1"), crisis("reliefweb-2")],
        };
        assert_eq!(batch.len(), 3);
        let ids: Vec<String> = batch.into_network().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["gdacs-1", "reliefweb-1", "reliefweb-2"]);
    }

    #[test]
    fn relay_is_optional() {
        let mut config = SourcesConfig::default();
        assert_eq!(
            SourceClient::new(&config).unwrap().strategies(),
            vec![Transport::Direct, Transport::Relay]
        );
        config.relay_url = String::new();
        assert_eq!(
            SourceClient::new(&config).unwrap().strategies(),
            vec![Transport::Direct]
        );
    }

    #[tokio::test]
    async fn unreachable_sources_yield_empty_batch() {
        let config = SourcesConfig {
            gdacs_api: "http://127.0.0.1:9".into(),
            reliefweb_api: "http://127.0.0.1:9".into(),
            relay_url: String::new(),
            request_timeout_secs: 2,
            ..SourcesConfig::default()
        };
        let client = SourceClient::new(&config).unwrap();
        assert!(client.fetch_all().await.is_empty());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_all() {
        let client = SourceClient::new(&SourcesConfig::default()).unwrap();
        let batch = client.fetch_all().await;
        println!(
            "gdacs={} reliefweb={}",
            batch.gdacs.len(),
            batch.reliefweb.len()
        );
    }
}
