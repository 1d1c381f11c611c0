//! Footprint construction on one frontage.
//!
//! The footprint is an ellipsoidal walk of three equal steps starting at the
//! frontage start, each turned by the same ±90° relative to the arrival
//! azimuth of the previous step. The first step points away from the frontage
//! (into the block), so the frontage itself is not a footprint side. At
//! building scale the result is a square up to solver noise; it is not an
//! exact Euclidean rectangle.

use crate::cfg::validate_depth;
use crate::error::BlockError;
use crate::geodesic::{direct, inverse, GeodesicEdge, Point};

/// Signed quarter turn relative to a forward azimuth.
///
/// Azimuths grow clockwise, so `Right` is `+90°` and `Left` is `−90°`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

impl Turn {
    #[inline]
    pub fn degrees(self) -> f64 {
        match self {
            Turn::Right => 90.0,
            Turn::Left => -90.0,
        }
    }
}

/// Four ordered corners of one generated building; the ring closes implicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub corners: [Point; 4],
}

impl Footprint {
    /// Corners with the first one repeated at the end, as ring formats expect.
    pub fn closed_ring(&self) -> [Point; 5] {
        let [a, b, c, d] = self.corners;
        [a, b, c, d, a]
    }

    /// Geodesic lengths of the four ring sides (the last one closes d → a).
    pub fn side_lengths(&self) -> [f64; 4] {
        let ring = self.closed_ring();
        std::array::from_fn(|k| inverse(ring[k], ring[k + 1]).distance)
    }
}

/// Build the footprint standing on `frontage`, `size` metres deep, turned by `turn`.
///
/// Errors
/// - `DegenerateEdge` when the frontage has no length (azimuth undefined).
/// - `InvalidParameter` when `size` is not a positive finite length.
pub fn construct_building(
    frontage: &GeodesicEdge,
    size: f64,
    turn: Turn,
) -> Result<Footprint, BlockError> {
    validate_depth(size)?;
    if frontage.start == frontage.end {
        return Err(BlockError::DegenerateEdge);
    }
    let inv = inverse(frontage.start, frontage.end);
    if inv.distance <= 0.0 {
        return Err(BlockError::DegenerateEdge);
    }

    let mut corners = [frontage.start; 4];
    let mut at = frontage.start;
    let mut heading = inv.azi1;
    for corner in corners.iter_mut().skip(1) {
        let step = direct(at, heading + turn.degrees(), size);
        *corner = step.point;
        at = step.point;
        heading = step.azimuth;
    }
    Ok(Footprint { corners })
}
