//! Metric projector
//!
//! The same projection feeds the IDW weights (raw value) and the displayed
//! readings (normalized value); the two differ only in scale.

use agroheat_core::{Metric, MetricSpec, Observation};

use super::SamplePoint;

/// Extracts one metric from observations.
#[derive(Debug, Clone, Copy)]
pub struct MetricProjector {
    metric: Metric,
    spec: &'static MetricSpec,
}

impl MetricProjector {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            spec: metric.spec(),
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn spec(&self) -> &'static MetricSpec {
        self.spec
    }

    /// Measured value, `None` when the observation lacks this metric.
    pub fn measured(&self, obs: &Observation) -> Option<f64> {
        obs.reading(self.metric)
    }

    /// Raw value, substituting the neutral default when not measured.
    pub fn raw(&self, obs: &Observation) -> f64 {
        self.measured(obs).unwrap_or(self.spec.neutral_default)
    }

    /// Raw value rescaled into [0, 1].
    pub fn normalized(&self, obs: &Observation) -> f64 {
        self.spec.normalize(self.raw(obs))
    }

    pub fn sample_point(&self, obs: &Observation) -> SamplePoint {
        SamplePoint::new(obs.latitude(), obs.longitude(), self.raw(obs))
    }
}
