//! # agroheat Core
//!
//! Core types, traits and I/O for the agroheat sensor heat-map engine.
//!
//! This crate provides:
//! - `Metric` / `MetricSpec`: the static per-metric table (range, decay exponent, color anchors)
//! - `SensorRecord` / `Observation`: raw and validated geotagged readings
//! - `InterpolationConfig`: the caller-facing tier configuration
//! - `GridGeometry` / `EstimateGrid` / `GridSample`: the interpolation lattice and its output
//! - JSON I/O for sensor records and sample triples

pub mod config;
pub mod error;
pub mod geo;
pub mod io;
pub mod metric;
pub mod observation;

pub use config::{InterpolationConfig, Tier};
pub use error::{Error, Result};
pub use geo::{BoundingBox, EstimateGrid, GridGeometry, GridSample};
pub use metric::{Metric, MetricSpec, SalinityClass};
pub use observation::{Observation, Readings, SensorRecord};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{InterpolationConfig, Tier};
    pub use crate::error::{Error, Result};
    pub use crate::geo::{BoundingBox, GridSample};
    pub use crate::metric::{Metric, MetricSpec};
    pub use crate::observation::{Observation, SensorRecord};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in agroheat.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
