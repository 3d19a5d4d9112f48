//! Density estimator
//!
//! Mean pairwise spacing of the observations, measured in the same
//! coordinate-degree space the IDW weights use (no geodesic correction).

use super::SamplePoint;

/// Spacing reported for zero or one point, in degrees.
pub const FALLBACK_DISTANCE: f64 = 0.01;

/// Lower bound of the smoothing influence radius, in degrees.
pub const MIN_INFLUENCE_RADIUS: f64 = 0.01;

/// Arithmetic mean of the Euclidean distances over all unordered pairs.
///
/// O(N²). Returns [`FALLBACK_DISTANCE`] for N ≤ 1.
pub fn mean_pairwise_distance(points: &[SamplePoint]) -> f64 {
    let n = points.len();
    if n <= 1 {
        return FALLBACK_DISTANCE;
    }

    let mut sum = 0.0;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            sum += a.dist(b.lat, b.lng);
        }
    }

    let pairs = n * (n - 1) / 2;
    sum / pairs as f64
}

/// `max(2 × mean pairwise distance, MIN_INFLUENCE_RADIUS)`
pub fn influence_radius(points: &[SamplePoint]) -> f64 {
    (2.0 * mean_pairwise_distance(points)).max(MIN_INFLUENCE_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fallback_for_tiny_inputs() {
        assert_eq!(mean_pairwise_distance(&[]), FALLBACK_DISTANCE);
        assert_eq!(
            mean_pairwise_distance(&[SamplePoint::new(1.0, 1.0, 5.0)]),
            FALLBACK_DISTANCE
        );
    }

    #[test]
    fn test_mean_of_triangle() {
        let pts = [
            SamplePoint::new(0.0, 0.0, 0.0),
            SamplePoint::new(0.0, 1.0, 0.0),
            SamplePoint::new(1.0, 0.0, 0.0),
        ];
        let expected = (1.0 + 1.0 + 2f64.sqrt()) / 3.0;
        assert_relative_eq!(mean_pairwise_distance(&pts), expected, epsilon = 1e-12);
        assert_relative_eq!(influence_radius(&pts), 2.0 * expected, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_points_hit_radius_floor() {
        let pts = [SamplePoint::new(3.0, 3.0, 1.0), SamplePoint::new(3.0, 3.0, 2.0)];
        assert_eq!(mean_pairwise_distance(&pts), 0.0);
        assert_eq!(influence_radius(&pts), MIN_INFLUENCE_RADIUS);
    }
}
