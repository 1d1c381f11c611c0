//! Ellipsoidal geometry on WGS84.
//!
//! Purpose
//! - Wrap the direct and inverse geodesic problems (`geographiclib-rs`) behind
//!   two small functions with named results, so the rest of the crate never
//!   handles positional tuples.
//! - Provide `Point` (degrees, lat/lon order) and `GeodesicEdge`.
//!
//! Conventions
//! - Azimuths are degrees clockwise from north, as returned by the solver; they
//!   are not normalized to `[0, 360)`.
//! - Distances are metres along the ellipsoid surface.

use std::sync::OnceLock;

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};
use nalgebra::Vector2;

pub mod edge;

pub use edge::{GeodesicEdge, Segments, Waypoints};

/// Geodetic position in degrees. No altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// `(lat, lon)` as a plain 2-vector; used for coordinate averaging only.
    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.lat, self.lon)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Inverse solve: distance and end azimuths between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inverse {
    pub distance: f64,
    /// Forward azimuth at the first point.
    pub azi1: f64,
    /// Forward azimuth at the second point.
    pub azi2: f64,
}

/// Direct solve: destination and the forward azimuth on arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direct {
    pub point: Point,
    pub azimuth: f64,
}

fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

/// Inverse geodesic problem from `a` to `b`.
pub fn inverse(a: Point, b: Point) -> Inverse {
    let (s12, azi1, azi2, _a12): (f64, f64, f64, f64) =
        wgs84().inverse(a.lat, a.lon, b.lat, b.lon);
    Inverse {
        distance: s12,
        azi1,
        azi2,
    }
}

/// Direct geodesic problem: walk `distance` metres from `from` along `azimuth`.
pub fn direct(from: Point, azimuth: f64, distance: f64) -> Direct {
    let (lat2, lon2, azi2): (f64, f64, f64) =
        wgs84().direct(from.lat, from.lon, azimuth, distance);
    Direct {
        point: Point::new(lat2, lon2),
        azimuth: azi2,
    }
}
