//! Coordinate-space primitives
//!
//! All geometry here works in plain coordinate-degree space: latitude and
//! longitude are treated as Cartesian axes with no geodesic correction,
//! the same space the interpolation weights are computed in.

mod grid;
mod sample;

pub use grid::{EstimateGrid, GridGeometry};
pub use sample::GridSample;

use serde::{Deserialize, Serialize};

/// Axis-aligned box in (latitude, longitude) degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Tight box around `(lat, lng)` points. `None` for an empty input.
    pub fn of<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (lat, lng) = iter.next()?;
        let mut bbox = Self::new(lat, lng, lat, lng);
        for (lat, lng) in iter {
            bbox.min_lat = bbox.min_lat.min(lat);
            bbox.max_lat = bbox.max_lat.max(lat);
            bbox.min_lng = bbox.min_lng.min(lng);
            bbox.max_lng = bbox.max_lng.max(lng);
        }
        Some(bbox)
    }

    /// Grow the box by `margin` degrees on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self::new(
            self.min_lat - margin,
            self.min_lng - margin,
            self.max_lat + margin,
            self.max_lng + margin,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bbox_of_points() {
        let bbox = BoundingBox::of([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 1.0, 1.0));
        assert!(BoundingBox::of(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bbox_expanded() {
        let bbox = BoundingBox::new(10.0, 20.0, 10.0, 20.0).expanded(0.02);
        assert_relative_eq!(bbox.lat_span(), 0.04, epsilon = 1e-12);
        assert_relative_eq!(bbox.lng_span(), 0.04, epsilon = 1e-12);
        let (lat, lng) = bbox.center();
        assert_relative_eq!(lat, 10.0, epsilon = 1e-12);
        assert_relative_eq!(lng, 20.0, epsilon = 1e-12);
        assert!(bbox.contains(10.01, 19.99));
    }
}
