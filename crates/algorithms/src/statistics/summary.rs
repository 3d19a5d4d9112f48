//! Per-metric summaries
//!
//! Computed over measured readings only: a sensor that did not report the
//! metric counts as missing, it does not contribute the neutral default.

use std::collections::BTreeMap;

use agroheat_core::{BoundingBox, Metric, Observation, SalinityClass};

/// Margin (degrees) around the sensors for the suggested map view.
pub const VIEW_MARGIN: f64 = 0.05;

/// Summary of one metric across a set of observations
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    /// Observations that reported a finite value
    pub measured: usize,
    /// Observations without a value for this metric
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl MetricSummary {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Share of observations that reported the metric, in [0, 1].
    pub fn coverage(&self) -> f64 {
        let total = self.measured + self.missing;
        if total == 0 {
            0.0
        } else {
            self.measured as f64 / total as f64
        }
    }
}

/// Summarize `metric` over `observations`.
///
/// Returns `None` when no observation reported the metric.
pub fn metric_summary(observations: &[Observation], metric: Metric) -> Option<MetricSummary> {
    let values: Vec<f64> = observations
        .iter()
        .filter_map(|obs| obs.reading(metric))
        .collect();

    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = sum / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(MetricSummary {
        metric,
        measured: values.len(),
        missing: observations.len() - values.len(),
        min,
        max,
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Count observations per salinity class.
///
/// Every class is present in the map, with zero when no reading falls in it.
/// Observations without a salinity reading are not counted.
pub fn salinity_breakdown(observations: &[Observation]) -> BTreeMap<SalinityClass, usize> {
    let mut counts: BTreeMap<SalinityClass, usize> =
        SalinityClass::ALL.iter().map(|&class| (class, 0)).collect();

    for value in observations.iter().filter_map(|obs| obs.reading(Metric::Salinity)) {
        *counts.entry(SalinityClass::classify(value)).or_default() += 1;
    }

    counts
}

/// Suggested map extent: the sensors' bounding box plus [`VIEW_MARGIN`].
pub fn view_extent(observations: &[Observation]) -> Option<BoundingBox> {
    BoundingBox::of(observations.iter().map(|o| (o.latitude(), o.longitude())))
        .map(|bbox| bbox.expanded(VIEW_MARGIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field() -> Vec<Observation> {
        vec![
            Observation::new(37.0, -5.0, "a")
                .unwrap()
                .with_reading(Metric::Temperature, 10.0)
                .with_reading(Metric::Salinity, 1.5),
            Observation::new(37.1, -5.0, "b")
                .unwrap()
                .with_reading(Metric::Temperature, 20.0)
                .with_reading(Metric::Salinity, 4.0),
            Observation::new(37.2, -5.0, "c")
                .unwrap()
                .with_reading(Metric::Temperature, 30.0)
                .with_reading(Metric::Salinity, 9.0),
            Observation::new(37.3, -5.0, "d").unwrap(),
        ]
    }

    #[test]
    fn test_metric_summary() {
        let s = metric_summary(&field(), Metric::Temperature).unwrap();
        assert_eq!(s.measured, 3);
        assert_eq!(s.missing, 1);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 30.0);
        assert_eq!(s.range(), 20.0);
        assert_relative_eq!(s.mean, 20.0);
        assert_relative_eq!(s.std_dev, (200.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(s.coverage(), 0.75);
    }

    #[test]
    fn test_unreported_metric_has_no_summary() {
        assert!(metric_summary(&field(), Metric::Light).is_none());
        assert!(metric_summary(&[], Metric::Temperature).is_none());
    }

    #[test]
    fn test_salinity_breakdown() {
        let counts = salinity_breakdown(&field());
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&SalinityClass::Optimal], 1);
        assert_eq!(counts[&SalinityClass::Moderate], 0);
        assert_eq!(counts[&SalinityClass::High], 1);
        assert_eq!(counts[&SalinityClass::Severe], 1);
    }

    #[test]
    fn test_view_extent() {
        let bbox = view_extent(&field()).unwrap();
        assert_relative_eq!(bbox.min_lat, 36.95, epsilon = 1e-12);
        assert_relative_eq!(bbox.max_lat, 37.35, epsilon = 1e-12);
        assert_relative_eq!(bbox.lng_span(), 0.1, epsilon = 1e-12);
        assert!(view_extent(&[]).is_none());
    }
}
