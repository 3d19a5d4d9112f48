//! Descriptive statistics over sensor observations
//!
//! - **summary**: per-metric min/max/mean, salinity class counts and the
//!   suggested map extent

pub mod summary;

pub use summary::{metric_summary, salinity_breakdown, view_extent, MetricSummary, VIEW_MARGIN};
