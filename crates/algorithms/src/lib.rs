//! # agroheat Algorithms
//!
//! The heat-map pipeline for sparse, irregularly placed sensor readings.
//!
//! ## Modules
//!
//! - **interpolation**: observation filter, metric projector, density estimator,
//!   parameter resolver, IDW grid interpolator, sparse-regime reinforcer,
//!   normalizer, and the `heatmap` entry point tying them together
//! - **statistics**: per-metric summaries and salinity class breakdowns

pub mod interpolation;
pub mod statistics;

pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::interpolation::{
        filter_valid, heatmap, heatmap_from_records, resolve, Heatmap, HeatmapResult,
        IdwField, MetricProjector, NormalizedReading, ResolvedParams,
    };
    pub use crate::statistics::{metric_summary, salinity_breakdown, view_extent, MetricSummary};
    pub use agroheat_core::prelude::*;
}
