//! Regular node lattice over a bounding box, and the dense estimate grid

use ndarray::Array2;

use super::BoundingBox;
use crate::error::{Error, Result};

/// Affine mapping between node indices and coordinates.
///
/// Unlike a raster, values live on nodes, not cell centers: a grid of size
/// `n` has `(n + 1) × (n + 1)` nodes, with the first and last node of each
/// axis sitting exactly on the box edges.
/// ```text
/// lat = origin_lat + row * lat_step
/// lng = origin_lng + col * lng_step
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Latitude of node row 0 (south edge)
    pub origin_lat: f64,
    /// Longitude of node column 0 (west edge)
    pub origin_lng: f64,
    /// Latitude spacing between node rows
    pub lat_step: f64,
    /// Longitude spacing between node columns
    pub lng_step: f64,
    /// Number of intervals per axis
    pub grid_size: usize,
}

impl GridGeometry {
    /// Lay a lattice of `grid_size` intervals per axis over `bbox`.
    pub fn over(bbox: &BoundingBox, grid_size: usize) -> Result<Self> {
        if grid_size == 0 {
            return Err(Error::InvalidParameter {
                name: "grid_size",
                value: grid_size.to_string(),
                reason: "must be at least 1".into(),
            });
        }
        let n = grid_size as f64;
        Ok(Self {
            origin_lat: bbox.min_lat,
            origin_lng: bbox.min_lng,
            lat_step: bbox.lat_span() / n,
            lng_step: bbox.lng_span() / n,
            grid_size,
        })
    }

    /// Nodes along each axis (`grid_size + 1`).
    pub fn nodes_per_side(&self) -> usize {
        self.grid_size + 1
    }

    pub fn node_count(&self) -> usize {
        self.nodes_per_side() * self.nodes_per_side()
    }

    /// Coordinates `(lat, lng)` of node `(row, col)`.
    #[inline]
    pub fn node_to_geo(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_lat + row as f64 * self.lat_step,
            self.origin_lng + col as f64 * self.lng_step,
        )
    }

    /// Fractional `(row, col)` of a coordinate; NaN on a degenerate axis.
    pub fn geo_to_node(&self, lat: f64, lng: f64) -> (f64, f64) {
        let row = if self.lat_step.abs() < 1e-15 {
            f64::NAN
        } else {
            (lat - self.origin_lat) / self.lat_step
        };
        let col = if self.lng_step.abs() < 1e-15 {
            f64::NAN
        } else {
            (lng - self.origin_lng) / self.lng_step
        };
        (row, col)
    }

    /// Box spanned by the outermost nodes.
    pub fn bounds(&self) -> BoundingBox {
        let (max_lat, max_lng) = self.node_to_geo(self.grid_size, self.grid_size);
        BoundingBox::new(self.origin_lat, self.origin_lng, max_lat, max_lng)
    }
}

/// Raw (un-normalized) field estimates at every node of a [`GridGeometry`].
///
/// Stored row-major: row = latitude index, column = longitude index.
#[derive(Debug, Clone)]
pub struct EstimateGrid {
    values: Array2<f64>,
    geometry: GridGeometry,
}

impl EstimateGrid {
    /// Wrap row-major node values. The length must equal `geometry.node_count()`.
    pub fn from_vec(values: Vec<f64>, geometry: GridGeometry) -> Result<Self> {
        let side = geometry.nodes_per_side();
        if values.len() != side * side {
            return Err(Error::SizeMismatch {
                expected: side * side,
                actual: values.len(),
            });
        }
        let values = Array2::from_shape_vec((side, side), values)
            .map_err(|e| Error::Algorithm(e.to_string()))?;
        Ok(Self { values, geometry })
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Iterate `(lat, lng, estimate)` for every node in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.values.indexed_iter().map(move |((row, col), &value)| {
            let (lat, lng) = self.geometry.node_to_geo(row, col);
            (lat, lng, value)
        })
    }

    /// Smallest and largest estimate, ignoring NaN.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
