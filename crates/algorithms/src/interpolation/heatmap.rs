//! Heat-map entry point
//!
//! Runs the whole pipeline once per (observations, metric, config) triple.
//! Nothing is retained between calls: the result owns its samples and the
//! resolver output is passed along explicitly, never stashed.

use tracing::{debug, trace};

use agroheat_core::{
    Algorithm, Error, GridSample, InterpolationConfig, Metric, Observation, Result, SensorRecord,
};

use super::density::influence_radius;
use super::filter::filter_valid;
use super::idw::{grid_geometry_for, interpolate_grid, IdwField, IdwParams};
use super::normalize::{normalize_grid, retain_significant};
use super::projector::MetricProjector;
use super::reinforce::reinforce;
use super::resolver::{resolve, ResolvedParams};
use super::SamplePoint;

/// An observation's value for the active metric, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReading {
    pub device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Measured value, `None` when the sensor did not report this metric
    pub raw: Option<f64>,
    /// Projected value in [0, 1] (neutral default when not measured)
    pub normalized: f64,
}

/// Output of one heat-map invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapResult {
    pub metric: Metric,
    /// Grid samples followed by any sparse-regime reinforcement samples.
    /// Every value lies in [`SIGNIFICANCE_THRESHOLD`](super::SIGNIFICANCE_THRESHOLD)..=1.
    pub samples: Vec<GridSample>,
    /// One entry per valid observation, in input order
    pub readings: Vec<NormalizedReading>,
    /// Resolver output (also computed on the passthrough path so that bad
    /// configuration always fails)
    pub params: ResolvedParams,
    pub influence_radius: f64,
    /// True when ≤ 1 observation bypassed the grid
    pub passthrough: bool,
    /// Split point between grid and reinforcement samples in `samples`
    pub grid_samples: usize,
}

impl HeatmapResult {
    /// Samples evaluated on the grid (or the passthrough point).
    pub fn grid(&self) -> &[GridSample] {
        &self.samples[..self.grid_samples]
    }

    /// Trailing sparse-regime reinforcement samples.
    pub fn reinforcement(&self) -> &[GridSample] {
        &self.samples[self.grid_samples..]
    }
}

/// Compute the heat map of `metric` over validated observations.
///
/// - 0 observations: empty samples.
/// - 1 observation: the point itself with its normalized value (no grid).
/// - otherwise: IDW grid over the expanded bounding box, normalized and
///   thresholded, followed by reinforcement samples when data are sparse.
///
/// Fails only on invalid configuration, before any grid work.
pub fn heatmap(
    observations: &[Observation],
    metric: Metric,
    config: &InterpolationConfig,
) -> Result<HeatmapResult> {
    let n = observations.len();
    let projector = MetricProjector::new(metric);
    let params = resolve(config, metric, n)?;

    let readings: Vec<NormalizedReading> = observations
        .iter()
        .map(|obs| NormalizedReading {
            device_id: obs.device_id().to_string(),
            latitude: obs.latitude(),
            longitude: obs.longitude(),
            raw: projector.measured(obs),
            normalized: projector.normalized(obs),
        })
        .collect();

    let points: Vec<SamplePoint> = observations.iter().map(|o| projector.sample_point(o)).collect();
    let radius = influence_radius(&points);

    if n <= 1 {
        trace!(metric = %metric, observations = n, "passthrough, no grid");
        let samples = retain_significant(
            readings
                .iter()
                .map(|r| GridSample::new(r.latitude, r.longitude, r.normalized))
                .collect(),
        );
        return Ok(HeatmapResult {
            metric,
            grid_samples: samples.len(),
            samples,
            readings,
            params,
            influence_radius: radius,
            passthrough: true,
        });
    }

    let field = IdwField::new(&points, IdwParams::from_resolved(&params, config.smoothing, radius))?;
    let geometry = grid_geometry_for(&points, params.grid_size)?;
    let grid = interpolate_grid(&field, &geometry)?;

    let mut samples = normalize_grid(&grid, projector.spec());
    let grid_samples = samples.len();
    samples.extend(retain_significant(reinforce(observations, &projector)));

    debug!(
        metric = %metric,
        observations = n,
        grid_size = params.grid_size,
        decay_exponent = params.decay_exponent,
        influence_radius = radius,
        smoothing = config.smoothing,
        grid_samples,
        reinforced = samples.len() - grid_samples,
        "heat map computed"
    );

    Ok(HeatmapResult {
        metric,
        samples,
        readings,
        params,
        influence_radius: radius,
        passthrough: false,
        grid_samples,
    })
}

/// [`heatmap`] over raw records, dropping those with unusable coordinates.
pub fn heatmap_from_records(
    records: &[SensorRecord],
    metric: Metric,
    config: &InterpolationConfig,
) -> Result<HeatmapResult> {
    heatmap(&filter_valid(records), metric, config)
}

/// Input bundle for the [`Heatmap`] algorithm.
#[derive(Debug, Clone)]
pub struct HeatmapInput {
    pub observations: Vec<Observation>,
    pub metric: Metric,
}

/// Heat-map algorithm
#[derive(Debug, Clone, Default)]
pub struct Heatmap;

impl Algorithm for Heatmap {
    type Input = HeatmapInput;
    type Output = HeatmapResult;
    type Params = InterpolationConfig;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Heatmap"
    }

    fn description(&self) -> &'static str {
        "Interpolate sparse sensor readings into a normalized IDW heat-map grid"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        heatmap(&input.observations, input.metric, &params)
    }
}
