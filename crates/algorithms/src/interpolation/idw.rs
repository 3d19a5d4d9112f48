//! Inverse Distance Weighting (IDW) grid interpolation
//!
//! Estimates the field at every node of a regular lattice as a weighted
//! average of all observations, weights falling off as a power of distance
//! and, optionally, an exponential damping that bounds the reach of
//! distant points.
//!
//! Reference:
//! Shepard, D. (1968). A two-dimensional interpolation function for
//! irregularly-spaced data. ACM National Conference.

use crate::maybe_rayon::*;
use agroheat_core::{BoundingBox, EstimateGrid, Error, GridGeometry, Result};

use super::resolver::ResolvedParams;
use super::SamplePoint;

/// Margin added around the observations' bounding box, in degrees.
/// Keeps structure near the outermost sensors from being clipped.
pub const GRID_MARGIN: f64 = 0.02;

/// Distance (degrees) under which a node is considered to sit on an
/// observation.
pub const COINCIDENCE_EPSILON: f64 = 1e-4;

/// How many times heavier a coincident observation is than the heaviest
/// possible non-coincident one.
pub const COINCIDENCE_DOMINANCE: f64 = 1e6;

/// Weight given to an observation closer than [`COINCIDENCE_EPSILON`].
///
/// A non-coincident observation has `d >= ε`, so its weight is at most
/// `ε^-p` (smoothing only lowers it). Scaling that bound by
/// [`COINCIDENCE_DOMINANCE`] makes the coincident sample dominate the
/// weighted mean while keeping every term finite: no division by zero, no
/// infinity, no NaN in the accumulation.
pub fn coincident_weight(decay_exponent: f64) -> f64 {
    COINCIDENCE_DOMINANCE / COINCIDENCE_EPSILON.powf(decay_exponent)
}

/// Parameters of the IDW weight function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdwParams {
    /// Power applied to distance. Must be positive.
    pub decay_exponent: f64,
    /// When set, weights are additionally multiplied by `exp(-d / radius)`.
    pub smoothing_radius: Option<f64>,
}

impl Default for IdwParams {
    fn default() -> Self {
        Self {
            decay_exponent: 2.0,
            smoothing_radius: None,
        }
    }
}

impl IdwParams {
    /// Weight-function parameters for a resolved pipeline invocation.
    pub fn from_resolved(params: &ResolvedParams, smoothing: bool, influence_radius: f64) -> Self {
        Self {
            decay_exponent: params.decay_exponent,
            smoothing_radius: smoothing.then_some(influence_radius),
        }
    }
}

/// A distance-weighted field over a fixed set of sample points.
#[derive(Debug, Clone, Copy)]
pub struct IdwField<'a> {
    points: &'a [SamplePoint],
    params: IdwParams,
    coincident_weight: f64,
}

impl<'a> IdwField<'a> {
    pub fn new(points: &'a [SamplePoint], params: IdwParams) -> Result<Self> {
        if !params.decay_exponent.is_finite() || params.decay_exponent <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "decay_exponent",
                value: params.decay_exponent.to_string(),
                reason: "must be a positive finite number".into(),
            });
        }
        if let Some(radius) = params.smoothing_radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: "smoothing_radius",
                    value: radius.to_string(),
                    reason: "must be a positive finite number".into(),
                });
            }
        }

        Ok(Self {
            points,
            params,
            coincident_weight: coincident_weight(params.decay_exponent),
        })
    }

    pub fn params(&self) -> &IdwParams {
        &self.params
    }

    pub fn points(&self) -> &'a [SamplePoint] {
        self.points
    }

    /// Weight of a sample at distance `d` from the query point.
    #[inline]
    pub fn weight(&self, d: f64) -> f64 {
        if d < COINCIDENCE_EPSILON {
            return self.coincident_weight;
        }
        let w = 1.0 / d.powf(self.params.decay_exponent);
        match self.params.smoothing_radius {
            Some(radius) => w * (-d / radius).exp(),
            None => w,
        }
    }

    /// Raw field estimate at `(lat, lng)`.
    ///
    /// ```text
    /// z = Σ(wi * zi) / Σ(wi)
    /// ```
    ///
    /// Returns 0 when every weight underflows to zero.
    pub fn estimate(&self, lat: f64, lng: f64) -> f64 {
        let mut sum_w = 0.0;
        let mut sum_wz = 0.0;

        for pt in self.points {
            let w = self.weight(pt.dist(lat, lng));
            sum_w += w;
            sum_wz += w * pt.value;
        }

        if sum_w > 0.0 {
            sum_wz / sum_w
        } else {
            0.0
        }
    }
}

/// Lattice over the points' bounding box expanded by [`GRID_MARGIN`].
pub fn grid_geometry_for(points: &[SamplePoint], grid_size: usize) -> Result<GridGeometry> {
    let bbox = BoundingBox::of(points.iter().map(|p| (p.lat, p.lng)))
        .ok_or_else(|| Error::Algorithm("No sample points provided".into()))?;
    GridGeometry::over(&bbox.expanded(GRID_MARGIN), grid_size)
}

/// Evaluate `field` at every node of `geometry`.
///
/// Rows are independent and evaluated in parallel; each node costs O(N),
/// so the whole grid is O(nodes × N).
pub fn interpolate_grid(field: &IdwField<'_>, geometry: &GridGeometry) -> Result<EstimateGrid> {
    let side = geometry.nodes_per_side();

    let data: Vec<f64> = (0..side)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; side];
            for (col, cell) in row_data.iter_mut().enumerate() {
                let (lat, lng) = geometry.node_to_geo(row, col);
                *cell = field.estimate(lat, lng);
            }
            row_data
        })
        .collect();

    EstimateGrid::from_vec(data, *geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn corner_points() -> Vec<SamplePoint> {
        vec![
            SamplePoint::new(0.0, 0.0, 10.0),
            SamplePoint::new(0.0, 1.0, 20.0),
            SamplePoint::new(1.0, 0.0, 30.0),
            SamplePoint::new(1.0, 1.0, 40.0),
        ]
    }

    fn field(points: &[SamplePoint], p: f64, radius: Option<f64>) -> IdwField<'_> {
        IdwField::new(
            points,
            IdwParams {
                decay_exponent: p,
                smoothing_radius: radius,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_idw_exact_at_sample_points() {
        let pts = corner_points();
        for radius in [None, Some(0.5)] {
            let f = field(&pts, 2.0, radius);
            for pt in &pts {
                assert_relative_eq!(f.estimate(pt.lat, pt.lng), pt.value, max_relative = 1e-4);
            }
        }
    }

    #[test]
    fn test_idw_center_is_average() {
        let pts = corner_points();
        let f = field(&pts, 2.0, Some(1.0));
        assert_relative_eq!(f.estimate(0.5, 0.5), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_idw_within_sample_range() {
        let pts = corner_points();
        let f = field(&pts, 3.0, None);
        for i in 0..=10 {
            for j in 0..=10 {
                let v = f.estimate(i as f64 * 0.13 - 0.2, j as f64 * 0.13 - 0.2);
                assert!((10.0..=40.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn test_coincident_weight_dominates() {
        for p in [0.5, 1.0, 2.0, 3.5] {
            let cw = coincident_weight(p);
            assert!(cw.is_finite());
            let f = field(&[], p, None);
            assert!(cw > 1e5 * f.weight(COINCIDENCE_EPSILON));
        }
    }

    #[test]
    fn test_smoothing_damps_weights() {
        let pts = corner_points();
        let raw = field(&pts, 2.0, None);
        let damped = field(&pts, 2.0, Some(0.5));
        assert!(damped.weight(1.0) < raw.weight(1.0));
        assert_relative_eq!(damped.weight(1.0), raw.weight(1.0) * (-2.0f64).exp());
    }

    #[test]
    fn test_underflowing_weights_give_zero() {
        let pts = [SamplePoint::new(0.0, 0.0, 25.0)];
        let f = field(&pts, 2.0, Some(0.01));
        assert_eq!(f.estimate(50.0, 50.0), 0.0);
    }

    #[test]
    fn test_higher_exponent_favours_nearest() {
        let pts = corner_points();
        let low = field(&pts, 1.0, None).estimate(0.1, 0.1);
        let high = field(&pts, 4.0, None).estimate(0.1, 0.1);
        assert!((high - 10.0).abs() < (low - 10.0).abs());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let pts = corner_points();
        for p in [0.0, -1.0, f64::NAN] {
            let params = IdwParams { decay_exponent: p, smoothing_radius: None };
            assert!(IdwField::new(&pts, params).is_err());
        }
        let params = IdwParams { decay_exponent: 2.0, smoothing_radius: Some(0.0) };
        assert!(IdwField::new(&pts, params).is_err());
    }

    #[test]
    fn test_grid_covers_margin() {
        let pts = corner_points();
        let geom = grid_geometry_for(&pts, 10).unwrap();
        let bounds = geom.bounds();
        assert_relative_eq!(bounds.min_lat, -GRID_MARGIN, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_lng, 1.0 + GRID_MARGIN, epsilon = 1e-12);
        assert!(grid_geometry_for(&[], 10).is_err());
    }

    #[test]
    fn test_interpolate_grid_shape_and_values() {
        let pts = corner_points();
        let f = field(&pts, 2.0, None);
        let geom = grid_geometry_for(&pts, 8).unwrap();
        let grid = interpolate_grid(&f, &geom).unwrap();
        assert_eq!(grid.shape(), (9, 9));

        for (lat, lng, v) in grid.nodes() {
            assert_relative_eq!(v, f.estimate(lat, lng));
        }
    }
}
