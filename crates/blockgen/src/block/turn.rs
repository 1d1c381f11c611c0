//! Per-edge turn selection toward the block centroid.

use crate::footprint::Turn;
use crate::geodesic::{inverse, GeodesicEdge, Point};

/// Signed difference `a − b` wrapped into `(−180, 180]`; exact opposites give `+180`.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    180.0 - (b - a + 180.0).rem_euclid(360.0)
}

/// Pick the quarter turn whose heading lies closer to `az_centroid`.
///
/// Ties (centroid exactly along the edge line) resolve to `Turn::Left`.
pub fn select_turn(az_edge: f64, az_centroid: f64) -> Turn {
    let right = angle_diff(az_centroid, az_edge + 90.0).abs();
    let left = angle_diff(az_centroid, az_edge - 90.0).abs();
    if right < left {
        Turn::Right
    } else {
        Turn::Left
    }
}

/// Turn for every frontage of `edge`, chosen once from the edge start.
pub fn turn_toward(edge: &GeodesicEdge, centroid: Point) -> Turn {
    let az_centroid = inverse(edge.start, centroid).azi1;
    select_turn(edge.azimuth(), az_centroid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_wraps() {
        assert_eq!(angle_diff(45.0, 90.0), -45.0);
        assert_eq!(angle_diff(45.0, -90.0), 135.0);
        assert_eq!(angle_diff(350.0, 10.0), -20.0);
        assert_eq!(angle_diff(10.0, 350.0), 20.0);
        assert_eq!(angle_diff(-720.0, 0.0), 0.0);
        assert_eq!(angle_diff(180.0, 0.0), 180.0);
        assert_eq!(angle_diff(0.0, 180.0), 180.0);
        assert_eq!(angle_diff(-90.0, 90.0), 180.0);
    }

    #[test]
    fn centroid_quadrants() {
        assert_eq!(select_turn(0.0, 45.0), Turn::Right);
        assert_eq!(select_turn(0.0, -45.0), Turn::Left);
        assert_eq!(select_turn(0.0, 135.0), Turn::Right);
        assert_eq!(select_turn(270.0, 0.0), Turn::Right);
        assert_eq!(select_turn(-170.0, 100.0), Turn::Left);
    }

    #[test]
    fn tie_falls_back_to_left() {
        assert_eq!(select_turn(0.0, 0.0), Turn::Left);
        assert_eq!(select_turn(30.0, 210.0), Turn::Left);
    }

    #[test]
    fn turn_faces_block_interior() {
        // Edge heading north on the western side of a block whose centre is east.
        let edge = GeodesicEdge::new(Point::new(10.0, 20.0), Point::new(10.001, 20.0));
        assert_eq!(turn_toward(&edge, Point::new(10.0005, 20.001)), Turn::Right);
        assert_eq!(turn_toward(&edge, Point::new(10.0005, 19.999)), Turn::Left);
    }
}
