//! Directed geodesic edges and their frontage segmentation.
//!
//! Segmentation re-solves the inverse problem from the current position to the
//! fixed end point at every step. The bearing toward a fixed point drifts as
//! one moves along the ellipsoid, so reusing the first azimuth would trace a
//! different path.

use crate::cfg::{SNAP_EPS, SNAP_REL};
use crate::error::BlockError;
use crate::jitter::{Jitter, UniformSource};

use super::{direct, inverse, Direct, Inverse, Point};

/// Ordered `(start, end)` pair; azimuth and distance are measured start → end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicEdge {
    pub start: Point,
    pub end: Point,
}

impl GeodesicEdge {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn inverse(&self) -> Inverse {
        inverse(self.start, self.end)
    }

    /// Ellipsoidal length in metres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.inverse().distance
    }

    /// Forward azimuth at `start`.
    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.inverse().azi1
    }

    /// Point and forward azimuth `distance` metres from `start` toward `end`.
    pub fn position(&self, distance: f64) -> Direct {
        direct(self.start, self.azimuth(), distance)
    }

    /// Jittered frontage sub-edges covering the edge end-to-end.
    ///
    /// Each sub-edge has length in `(0, target·(1+variation)]`; consecutive
    /// sub-edges share their endpoint exactly and the last one ends exactly at
    /// `self.end`. Fails with `InvalidParameter` for bad lengths/fractions and
    /// `InvalidPolygon` for a zero-length edge.
    ///
    /// A leftover of at most `min(1 µm, 0.1 % of the shortest step)` is folded
    /// into the last sub-edge, so an edge that long past a multiple of the
    /// target yields one sub-edge fewer than `ceil(length / target)`.
    pub fn segments<'r, R: UniformSource + ?Sized>(
        &self,
        target_length: f64,
        variation_fraction: f64,
        rng: &'r mut R,
    ) -> Result<Segments<'r, R>, BlockError> {
        let jitter = Jitter::new(target_length, variation_fraction)?;
        Ok(Segments {
            walk: SegmentWalk::new(*self, jitter)?,
            rng,
        })
    }

    /// Positions at cumulative jittered distances `0, d1, d1+d2, …` strictly
    /// below the edge length, all on the single geodesic solved once from
    /// `start` (no per-step re-solve).
    pub fn waypoints<'r, R: UniformSource + ?Sized>(
        &self,
        target_length: f64,
        variation_fraction: f64,
        rng: &'r mut R,
    ) -> Result<Waypoints<'r, R>, BlockError> {
        let jitter = Jitter::new(target_length, variation_fraction)?;
        let inv = self.inverse();
        Ok(Waypoints {
            start: self.start,
            azimuth: inv.azi1,
            total: inv.distance,
            travelled: 0.0,
            jitter,
            rng,
        })
    }
}

/// Segmentation state without the random source, so callers that own the
/// source across several edges (the block generator) can drive it directly.
#[derive(Clone, Debug)]
pub(crate) struct SegmentWalk {
    current: Point,
    end: Point,
    total: f64,
    travelled: f64,
    jitter: Jitter,
    snap: f64,
    done: bool,
}

impl SegmentWalk {
    pub(crate) fn new(edge: GeodesicEdge, jitter: Jitter) -> Result<Self, BlockError> {
        let total = edge.length();
        if edge.start == edge.end || total <= 0.0 {
            return Err(BlockError::invalid_polygon(format!(
                "boundary edge has coincident start and end ({:?})",
                edge.start
            )));
        }
        Ok(Self {
            current: edge.start,
            end: edge.end,
            total,
            travelled: 0.0,
            jitter,
            snap: SNAP_EPS.min(jitter.min_step() * SNAP_REL),
            done: false,
        })
    }

    #[inline]
    pub(crate) fn total(&self) -> f64 {
        self.total
    }

    pub(crate) fn step<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> Option<GeodesicEdge> {
        if self.done || self.current == self.end {
            self.done = true;
            return None;
        }
        let to_end = inverse(self.current, self.end);
        let remaining = to_end.distance;
        let d = self.jitter.draw(rng);
        let next = if d >= remaining - self.snap {
            self.done = true;
            self.travelled += remaining;
            self.end
        } else {
            self.travelled += d;
            direct(self.current, to_end.azi1, d).point
        };
        let sub = GeodesicEdge::new(self.current, next);
        self.current = next;
        Some(sub)
    }
}

/// Lazy frontage sub-edges of one `GeodesicEdge`; see [`GeodesicEdge::segments`].
pub struct Segments<'r, R: ?Sized> {
    walk: SegmentWalk,
    rng: &'r mut R,
}

impl<R: ?Sized> Segments<'_, R> {
    /// Ellipsoidal length of the parent edge.
    pub fn total(&self) -> f64 {
        self.walk.total()
    }

    /// Cumulative distance covered by the sub-edges emitted so far.
    pub fn travelled(&self) -> f64 {
        self.walk.travelled
    }
}

impl<R: UniformSource + ?Sized> Iterator for Segments<'_, R> {
    type Item = GeodesicEdge;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.step(&mut *self.rng)
    }
}

/// Lazy positions along one edge; see [`GeodesicEdge::waypoints`].
pub struct Waypoints<'r, R: ?Sized> {
    start: Point,
    azimuth: f64,
    total: f64,
    travelled: f64,
    jitter: Jitter,
    rng: &'r mut R,
}

impl<R: UniformSource + ?Sized> Iterator for Waypoints<'_, R> {
    type Item = Direct;

    fn next(&mut self) -> Option<Self::Item> {
        if self.travelled >= self.total {
            return None;
        }
        let here = direct(self.start, self.azimuth, self.travelled);
        self.travelled = (self.travelled + self.jitter.draw(&mut *self.rng)).min(self.total);
        Some(here)
    }
}
