//! End-to-end block passes on small synthetic squares.

use super::*;
use crate::geodesic::{direct, inverse};
use rand::{rngs::StdRng, SeedableRng};

/// Clockwise ring walked N, E, S from `origin`; walked sides are `side` metres.
fn square_block(origin: Point, side: f64) -> Vec<Point> {
    let p1 = direct(origin, 0.0, side).point;
    let p2 = direct(p1, 90.0, side).point;
    let p3 = direct(p2, 180.0, side).point;
    vec![origin, p1, p2, p3]
}

fn exact_params(target: f64, depth: f64) -> BlockParams {
    BlockParams {
        target_segment_length: target,
        variation_fraction: 0.0,
        footprint_depth: depth,
        close_ring: false,
    }
}

#[test]
fn square_block_yields_thirty_footprints() {
    let poly = Polygon::new(square_block(Point::new(40.4168, -3.7038), 100.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let fps = generate(&poly, exact_params(10.0, 1.0), &mut rng).unwrap();
    assert_eq!(fps.len(), 30);
    for fp in &fps {
        let sides = fp.side_lengths();
        for side in &sides[..3] {
            assert!((side - 1.0).abs() < 1e-3, "side {side}");
        }
    }
    for edge in fps.chunks(10) {
        for pair in edge.windows(2) {
            let spacing = inverse(pair[0].corners[0], pair[1].corners[0]).distance;
            assert!((spacing - 10.0).abs() < 1e-6, "spacing {spacing}");
        }
    }
}

#[test]
fn footprints_face_the_centroid() {
    let poly = Polygon::new(square_block(Point::new(-23.55, -46.63), 100.0)).unwrap();
    let gen = BlockGenerator::new(&poly, exact_params(10.0, 2.0)).unwrap();
    let centre = gen.centroid();
    let mut rng = StdRng::seed_from_u64(0);
    for fp in gen.footprints(&mut rng) {
        let fp = fp.unwrap();
        let d0 = inverse(fp.corners[0], centre).distance;
        let d1 = inverse(fp.corners[1], centre).distance;
        assert!(d1 < d0, "footprint walks away from the block: {d1} >= {d0}");
    }
}

#[test]
fn one_turn_per_edge() {
    let poly = Polygon::new(square_block(Point::new(35.68, 139.69), 100.0)).unwrap();
    let centre = poly.centroid();
    for edge in poly.boundary_edges() {
        assert_eq!(turn_toward(&edge, centre), Turn::Right);
    }
    let reversed: Vec<Point> = poly.vertices().iter().rev().copied().collect();
    let poly_rev = Polygon::new(reversed).unwrap();
    for edge in poly_rev.boundary_edges() {
        assert_eq!(turn_toward(&edge, centre), Turn::Left);
    }
}

#[test]
fn close_ring_adds_the_last_side() {
    let ring = square_block(Point::new(59.33, 18.07), 100.0);
    let poly = Polygon::new(ring).unwrap();
    let open = generate(&poly, exact_params(30.0, 1.0), &mut StdRng::seed_from_u64(0)).unwrap();
    let closed_params = BlockParams {
        close_ring: true,
        ..exact_params(30.0, 1.0)
    };
    let closed = generate(&poly, closed_params, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(open.len(), 12);
    assert_eq!(closed.len(), 16);
    assert_eq!(&closed[..12], &open[..]);
}

#[test]
fn seeded_passes_replay() {
    let poly = Polygon::new(square_block(Point::new(1.29, 103.85), 80.0)).unwrap();
    let params = BlockParams {
        target_segment_length: 7.0,
        variation_fraction: 0.3,
        footprint_depth: 5.0,
        close_ring: false,
    };
    let a = generate(&poly, params, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = generate(&poly, params, &mut StdRng::seed_from_u64(9)).unwrap();
    let c = generate(&poly, params, &mut StdRng::seed_from_u64(10)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn jittered_frontages_stay_in_band() {
    let poly = Polygon::new(square_block(Point::new(45.0, 7.0), 60.0)).unwrap();
    let params = BlockParams {
        target_segment_length: 6.0,
        variation_fraction: 0.5,
        footprint_depth: 3.0,
        close_ring: false,
    };
    let gen = BlockGenerator::new(&poly, params).unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let starts: Vec<Point> = gen
        .footprints(&mut rng)
        .map(|fp| fp.map(|f| f.corners[0]))
        .collect::<Result<_, _>>()
        .unwrap();
    let corners = &poly.vertices()[..3];
    for pair in starts.windows(2) {
        // Skip the jump from the last frontage of one edge to the first of the next.
        if corners.contains(&pair[1]) {
            continue;
        }
        let d = inverse(pair[0], pair[1]).distance;
        assert!(d > 0.0 && d <= 9.0 + 1e-6, "frontage {d}");
    }
}

#[test]
fn generation_leaves_polygon_untouched() {
    let poly = Polygon::new(square_block(Point::new(0.0, 0.0), 50.0)).unwrap();
    let before = poly.clone();
    let _ = generate(&poly, BlockParams::default(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(poly, before);
}

#[test]
fn bad_parameters_fail_up_front() {
    let poly = Polygon::new(square_block(Point::new(0.0, 0.0), 50.0)).unwrap();
    let params = BlockParams {
        footprint_depth: 0.0,
        ..BlockParams::default()
    };
    assert!(matches!(
        BlockGenerator::new(&poly, params),
        Err(BlockError::InvalidParameter { .. })
    ));
}

#[test]
fn batch_isolates_failing_features() {
    let good = square_block(Point::new(48.2, 16.37), 40.0);
    let too_small = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)];
    let repeated = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 0.001),
        Point::new(0.0, 0.001),
        Point::new(0.001, 0.001),
    ];
    let mut rng = StdRng::seed_from_u64(2);
    let outcomes = generate_batch(
        vec![good.clone(), too_small, repeated, good],
        exact_params(10.0, 1.0),
        &mut rng,
    );
    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes.iter().map(|o| o.index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 12);
    assert!(matches!(
        outcomes[1].result,
        Err(BlockError::InvalidPolygon { .. })
    ));
    assert!(matches!(
        outcomes[2].result,
        Err(BlockError::InvalidPolygon { .. })
    ));
    assert_eq!(outcomes[3].result, outcomes[0].result);
}
