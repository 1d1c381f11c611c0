//! Block outlines: validated vertex rings, centroid, boundary-edge iteration.
//!
//! Known limits
//! - `centroid` is the plain mean of latitudes and of longitudes. It is fine
//!   for city blocks and wrong near the poles, across the antimeridian, or for
//!   large extents.
//! - `boundary_edges` stops at the last vertex: the side from the last vertex
//!   back to the first is not visited. `closed_boundary_edges` visits it.

use nalgebra::Vector2;

use crate::error::BlockError;
use crate::geodesic::{GeodesicEdge, Point};

/// Ordered block outline with at least 3 distinct consecutive vertices.
///
/// A trailing copy of the first vertex (ring closure as written by most
/// interchange formats) is dropped on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(mut vertices: Vec<Point>) -> Result<Self, BlockError> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(BlockError::invalid_polygon(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(bad) = vertices.iter().find(|p| !p.is_finite()) {
            return Err(BlockError::invalid_polygon(format!("non-finite vertex {bad:?}")));
        }
        if let Some(k) = vertices.windows(2).position(|w| w[0] == w[1]) {
            return Err(BlockError::invalid_polygon(format!(
                "boundary edge {k} has coincident start and end"
            )));
        }
        Ok(Self { vertices })
    }

    /// Build from `(lat, lon)` pairs in degrees.
    pub fn from_lat_lon<I>(pairs: I) -> Result<Self, BlockError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(lat, lon)| Point::new(lat, lon))
                .collect(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Coordinate-average centroid (mean latitude, mean longitude).
    pub fn centroid(&self) -> Point {
        let sum: Vector2<f64> = self.vertices.iter().map(Point::as_vector).sum();
        Point::from_vector(sum / self.vertices.len() as f64)
    }

    /// Consecutive pairs `(v[i], v[i+1])` for `i` in `0..n-1`; no closing edge.
    pub fn boundary_edges(&self) -> BoundaryEdges<'_> {
        BoundaryEdges {
            vertices: &self.vertices,
            next: 0,
            closed: false,
        }
    }

    /// All `n` sides, including `v[n-1] → v[0]`.
    pub fn closed_boundary_edges(&self) -> BoundaryEdges<'_> {
        BoundaryEdges {
            vertices: &self.vertices,
            next: 0,
            closed: true,
        }
    }
}

/// Lazy iterator over polygon sides. A clone continues from the current
/// position; call the producing method again for a fresh pass.
#[derive(Clone, Debug)]
pub struct BoundaryEdges<'a> {
    vertices: &'a [Point],
    next: usize,
    closed: bool,
}

impl Iterator for BoundaryEdges<'_> {
    type Item = GeodesicEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.vertices.len();
        let i = self.next;
        let edge = if i + 1 < n {
            GeodesicEdge::new(self.vertices[i], self.vertices[i + 1])
        } else if self.closed && i + 1 == n {
            GeodesicEdge::new(self.vertices[i], self.vertices[0])
        } else {
            return None;
        };
        self.next += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        };
        let left = total.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for BoundaryEdges<'_> {}
