//! One load/refresh run of the crisis pipeline and the result it owns.

use std::collections::HashSet;
use std::fmt;
use std::future::Future;

use crisis_cache::{CHARITIES_KEY, CRISES_KEY, Cache};
use crisis_config::CrisisMapConfig;
use crisis_core::{Crisis, CrisisCategory, FilterState, Region};
use crisis_sources::{SourceBatch, SourceClient, SourceError, embedded};
use serde::Serialize;

use crate::charities::CharityCatalog;
use crate::heat::{HeatPoint, heat_points};
use crate::merge::{DataOrigin, merge};
use crate::{filter, ranking};

// ── Feed ───────────────────────────────────────────────────────────

/// Something that can fetch every network source at once.
///
/// Failures are already folded into empty lists by the time a batch is
/// returned.
pub trait CrisisFeed {
    fn fetch(&self) -> impl Future<Output = SourceBatch> + Send;
}

impl CrisisFeed for SourceClient {
    fn fetch(&self) -> impl Future<Output = SourceBatch> + Send {
        self.fetch_all()
    }
}

// ── Status ─────────────────────────────────────────────────────────

/// Where the data of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DataStatus {
    /// Fresh network data, possibly supplemented by embedded records.
    Live { count: usize },
    /// Re-ranked from the cache.
    Cached,
    /// Every network source came back empty.
    Sample,
    /// Live sources are disabled by configuration.
    SampleOnly,
}

impl DataStatus {
    /// Human-readable status line.
    pub fn note(self) -> String {
        match self {
            Self::Live { count } => format!("Live + sample data ({count} crises)"),
            Self::Cached => "Using cached data".to_string(),
            Self::Sample => "Using sample data".to_string(),
            Self::SampleOnly => "Local mode - using sample data".to_string(),
        }
    }

    pub const fn is_degraded(self) -> bool {
        matches!(self, Self::Sample | Self::SampleOnly)
    }
}

impl fmt::Display for DataStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.note())
    }
}

// ── Run ────────────────────────────────────────────────────────────

/// A filtered view: visible records plus the highlighted ids among them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredView {
    pub crises: Vec<Crisis>,
    pub highlighted: Vec<String>,
}

/// The ranked result of one pipeline run. Immutable until the next run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    crises: Vec<Crisis>,
    highlighted: Vec<String>,
    highlighted_ids: HashSet<String>,
    status: DataStatus,
}

impl PipelineRun {
    /// Rank `crises` and wrap the result.
    pub fn from_merged(crises: Vec<Crisis>, top_per_region: usize, status: DataStatus) -> Self {
        let crises = crate::merge::finalize(crises);
        let ranked = ranking::rank(crises, top_per_region);
        let highlighted_ids = ranked.highlighted.iter().cloned().collect();
        Self {
            crises: ranked.crises,
            highlighted: ranked.highlighted,
            highlighted_ids,
            status,
        }
    }

    pub fn all(&self) -> &[Crisis] {
        &self.crises
    }

    pub fn by_id(&self, id: &str) -> Option<&Crisis> {
        self.crises.iter().find(|c| c.id == id)
    }

    pub fn by_region(&self, region: Region) -> Vec<&Crisis> {
        self.crises.iter().filter(|c| c.region == region).collect()
    }

    pub fn by_category(&self, category: CrisisCategory) -> Vec<&Crisis> {
        self.crises
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted_ids.contains(id)
    }

    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }

    /// Highlighted records, in highlight order.
    pub fn highlighted_crises(&self) -> Vec<&Crisis> {
        self.highlighted
            .iter()
            .filter_map(|id| self.by_id(id))
            .collect()
    }

    pub fn filtered(&self, state: &FilterState) -> FilteredView {
        let crises = filter::apply(&self.crises, state);
        let highlighted = filter::visible_highlights(&self.highlighted, &crises);
        FilteredView {
            crises,
            highlighted,
        }
    }

    pub fn heat_points(&self) -> Vec<HeatPoint> {
        heat_points(&self.crises)
    }

    pub const fn status(&self) -> DataStatus {
        self.status
    }

    pub fn note(&self) -> String {
        self.status.note()
    }

    pub fn len(&self) -> usize {
        self.crises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crises.is_empty()
    }
}

// ── Pipeline ───────────────────────────────────────────────────────

/// Orchestrates fetch → merge → cache → rank.
pub struct CrisisPipeline<F> {
    feed: F,
    cache: Cache,
    catalog: CharityCatalog,
    use_live_sources: bool,
    top_per_region: usize,
}

impl CrisisPipeline<SourceClient> {
    /// Pipeline over the real network sources and the configured cache.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be built or the
    /// embedded charity list does not decode.
    pub fn from_config(config: &CrisisMapConfig) -> Result<Self, SourceError> {
        let feed = SourceClient::new(&config.sources)?;
        Self::new(feed, Cache::from_config(&config.cache), config)
    }
}

impl<F: CrisisFeed> CrisisPipeline<F> {
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the embedded charity list does not
    /// decode.
    pub fn new(feed: F, cache: Cache, config: &CrisisMapConfig) -> Result<Self, SourceError> {
        let catalog = CharityCatalog::load(&cache, &config.charities)?;
        Ok(Self {
            feed,
            cache,
            catalog,
            use_live_sources: config.sources.use_live_sources,
            top_per_region: config.ranking.top_per_region,
        })
    }

    pub const fn catalog(&self) -> &CharityCatalog {
        &self.catalog
    }

    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Produce a fresh run.
    ///
    /// With live sources disabled the embedded dataset is ranked directly.
    /// Otherwise a fresh cached merged set is re-ranked, and only on a miss
    /// are the network sources fetched, merged, and cached.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] only if the embedded dataset does not
    /// decode. Network and cache failures degrade instead of erroring.
    pub async fn load(&self) -> Result<PipelineRun, SourceError> {
        if !self.use_live_sources {
            return Ok(self.finish(embedded::crises()?, DataStatus::SampleOnly));
        }

        if let Some(cached) = self.cache.get::<Vec<Crisis>>(CRISES_KEY) {
            tracing::info!(count = cached.len(), "using cached crises");
            return Ok(self.finish(cached, DataStatus::Cached));
        }

        let batch = self.feed.fetch().await;
        tracing::info!(
            gdacs = batch.gdacs.len(),
            reliefweb = batch.reliefweb.len(),
            "fetched network sources"
        );
        let mut network = batch.into_network();
        self.catalog.attach_related(&mut network);

        let outcome = merge(network, &embedded::crises()?);
        // Outage fallbacks are cached too: until the TTL lapses, loads report
        // `Cached` and the network is not retried. `refresh` forces a refetch.
        self.cache.set(CRISES_KEY, &outcome.crises);

        let status = match outcome.origin {
            DataOrigin::Live => DataStatus::Live {
                count: outcome.crises.len(),
            },
            DataOrigin::Sample => DataStatus::Sample,
        };
        Ok(self.finish(outcome.crises, status))
    }

    /// Discard every cached entry, then load from scratch.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub async fn refresh(&self) -> Result<PipelineRun, SourceError> {
        self.cache.clear();
        self.cache.set(CHARITIES_KEY, self.catalog.all());
        self.load().await
    }

    fn finish(&self, crises: Vec<Crisis>, status: DataStatus) -> PipelineRun {
        let run = PipelineRun::from_merged(crises, self.top_per_region, status);
        tracing::info!(
            count = run.len(),
            highlighted = run.highlighted().len(),
            status = %status,
            "pipeline run ready"
        );
        run
    }
}
