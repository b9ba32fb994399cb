//! # crisis-engine
//!
//! The CrisisMap data pipeline: merging adapter output with the embedded
//! fallback, percentile ranking, per-region highlights, filtering, the
//! charity join, and the [`pipeline::PipelineRun`] that owns a run's result.

pub mod charities;
pub mod filter;
pub mod heat;
pub mod merge;
pub mod pipeline;
pub mod ranking;

pub use charities::CharityCatalog;
pub use heat::HeatPoint;
pub use merge::{DataOrigin, MergeOutcome};
pub use pipeline::{CrisisFeed, CrisisPipeline, DataStatus, FilteredView, PipelineRun};
pub use ranking::{Ranking, Thresholds};
