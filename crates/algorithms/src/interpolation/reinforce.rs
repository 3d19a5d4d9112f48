//! Sparse-regime reinforcement
//!
//! With few sensors the interpolated field visually under-represents the
//! measured locations. Below [`SPARSE_REINFORCEMENT_LIMIT`] observations the
//! measured points are emitted again at their exact coordinates with a
//! boosted value. This is a deliberate display bias, not an estimate.

use agroheat_core::{GridSample, Observation};

use super::projector::MetricProjector;

/// Observation counts strictly below this get reinforcement samples.
/// Tunable display policy.
pub const SPARSE_REINFORCEMENT_LIMIT: usize = 15;

/// Multiplier applied to reinforced normalized values (result clamps to 1).
/// Tunable display policy.
pub const REINFORCEMENT_BOOST: f64 = 1.2;

/// One boosted sample per observation when data are sparse, empty otherwise.
pub fn reinforce(observations: &[Observation], projector: &MetricProjector) -> Vec<GridSample> {
    if observations.len() >= SPARSE_REINFORCEMENT_LIMIT {
        return Vec::new();
    }

    observations
        .iter()
        .map(|obs| {
            let boosted = (projector.normalized(obs) * REINFORCEMENT_BOOST).min(1.0);
            GridSample::new(obs.latitude(), obs.longitude(), boosted)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agroheat_core::Metric;
    use approx::assert_relative_eq;

    fn observations(n: usize, temperature: f64) -> Vec<Observation> {
        (0..n)
            .map(|i| {
                Observation::new(i as f64 * 0.01, 0.0, format!("dev{i}"))
                    .unwrap()
                    .with_reading(Metric::Temperature, temperature)
            })
            .collect()
    }

    #[test]
    fn test_sparse_points_are_boosted() {
        let projector = MetricProjector::new(Metric::Temperature);
        let samples = reinforce(&observations(3, 10.0), &projector);
        assert_eq!(samples.len(), 3);
        for s in &samples {
            assert_relative_eq!(s.value, 0.25 * REINFORCEMENT_BOOST);
        }
        assert_eq!(samples[2].latitude, 0.02);
    }

    #[test]
    fn test_boost_clamps_to_one() {
        let projector = MetricProjector::new(Metric::Temperature);
        let samples = reinforce(&observations(2, 38.0), &projector);
        assert!(samples.iter().all(|s| s.value == 1.0));
    }

    #[test]
    fn test_dense_input_not_reinforced() {
        let projector = MetricProjector::new(Metric::Temperature);
        assert_eq!(reinforce(&observations(14, 10.0), &projector).len(), 14);
        assert!(reinforce(&observations(15, 10.0), &projector).is_empty());
    }
}
