//! Normalization and significance filtering
//!
//! Node estimates are rescaled with the metric's physical range, then
//! anything below [`SIGNIFICANCE_THRESHOLD`] is dropped so the output stays
//! bounded and negligible signal isn't painted as noise.

use agroheat_core::{EstimateGrid, GridSample, MetricSpec};

/// Smallest normalized value worth emitting. Tunable display policy.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.005;

#[inline]
pub fn is_significant(value: f64) -> bool {
    value >= SIGNIFICANCE_THRESHOLD
}

/// Normalize every node of `grid` and keep the significant ones.
pub fn normalize_grid(grid: &EstimateGrid, spec: &MetricSpec) -> Vec<GridSample> {
    grid.nodes()
        .filter_map(|(lat, lng, estimate)| {
            let value = spec.normalize(estimate);
            is_significant(value).then(|| GridSample::new(lat, lng, value))
        })
        .collect()
}

/// Drop samples below the significance threshold, preserving order.
pub fn retain_significant(mut samples: Vec<GridSample>) -> Vec<GridSample> {
    samples.retain(|s| is_significant(s.value));
    samples
}
