//! Generate footprints for one ≈100 m square block and print them.
//!
//! Usage:
//!   cargo run -p blockgen --example square_block -- [seed]

use blockgen::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let origin = Point::new(52.3702, 4.8952);
    let p1 = direct(origin, 0.0, 100.0).point;
    let p2 = direct(p1, 90.0, 100.0).point;
    let p3 = direct(p2, 180.0, 100.0).point;
    let poly = Polygon::new(vec![origin, p1, p2, p3]).expect("square block");
    let params = BlockParams {
        target_segment_length: 10.0,
        variation_fraction: 0.2,
        footprint_depth: 8.0,
        close_ring: false,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let footprints = generate(&poly, params, &mut rng).expect("generation");
    println!("centroid {:?}", poly.centroid());
    for (i, fp) in footprints.iter().enumerate() {
        let c = fp.corners;
        println!(
            "footprint {i}: ({:.6},{:.6}) ({:.6},{:.6}) ({:.6},{:.6}) ({:.6},{:.6})",
            c[0].lat, c[0].lon, c[1].lat, c[1].lon, c[2].lat, c[2].lon, c[3].lat, c[3].lon
        );
    }
}
