//! Heat-map interpolation pipeline
//!
//! Leaves first:
//! - filter: keep observations with usable coordinates
//! - projector: scalar value of the active metric per observation
//! - density: mean pairwise spacing, sizing the influence radius
//! - resolver: tiers + metric + count → grid size and decay exponent
//! - idw: distance-weighted field and its evaluation over the node lattice
//! - reinforce: re-inject measured points when data are sparse
//! - normalize: rescale to [0, 1] and drop visual noise
//! - heatmap: the entry point running all of the above

mod density;
mod filter;
mod heatmap;
mod idw;
mod normalize;
mod projector;
mod reinforce;
mod resolver;

pub use density::{influence_radius, mean_pairwise_distance, FALLBACK_DISTANCE, MIN_INFLUENCE_RADIUS};
pub use filter::{filter_valid, latest_per_device};
pub use heatmap::{heatmap, heatmap_from_records, Heatmap, HeatmapInput, HeatmapResult, NormalizedReading};
pub use idw::{
    coincident_weight, grid_geometry_for, interpolate_grid, IdwField, IdwParams,
    COINCIDENCE_DOMINANCE, COINCIDENCE_EPSILON, GRID_MARGIN,
};
pub use normalize::{is_significant, normalize_grid, retain_significant, SIGNIFICANCE_THRESHOLD};
pub use projector::MetricProjector;
pub use reinforce::{reinforce, REINFORCEMENT_BOOST, SPARSE_REINFORCEMENT_LIMIT};
pub use resolver::{decay_exponent, resolve, DensityBand, ResolvedParams};

/// A projected observation: coordinates plus the raw value of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub lat: f64,
    pub lng: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(lat: f64, lng: f64, value: f64) -> Self {
        Self { lat, lng, value }
    }

    /// Squared Euclidean distance in degree space
    #[inline]
    pub fn dist_sq(&self, lat: f64, lng: f64) -> f64 {
        let dlat = self.lat - lat;
        let dlng = self.lng - lng;
        dlat * dlat + dlng * dlng
    }

    /// Euclidean distance in degree space
    #[inline]
    pub fn dist(&self, lat: f64, lng: f64) -> f64 {
        self.dist_sq(lat, lng).sqrt()
    }
}
