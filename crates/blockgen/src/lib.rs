//! Synthetic building footprints along city-block outlines.
//!
//! Purpose
//! - Split each side of a block polygon into jittered frontages measured on
//!   the WGS84 ellipsoid, then stand one quadrilateral footprint on every
//!   frontage, turned toward the block interior.
//! - Stay I/O free: inputs are plain `(lat, lon)` rings, outputs are
//!   `Footprint` values. Reading and writing map formats belongs to callers.
//!
//! Layout
//! - `geodesic`: direct/inverse solves, `Point`, `GeodesicEdge` segmentation.
//! - `polygon`: validated outlines, centroid, boundary-edge iteration.
//! - `footprint`: `construct_building` and the `Turn` it takes.
//! - `block`: per-edge turn selection, lazy block pass, batch isolation.
//! - `jitter`: injectable uniform source and the step-length rule.
//! - `cfg`: `BlockParams` and fixed tolerances.

pub mod block;
pub mod cfg;
pub mod error;
pub mod footprint;
pub mod geodesic;
pub mod jitter;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use block::{generate, generate_batch, BlockGenerator, FeatureOutcome, Footprints};
pub use cfg::BlockParams;
pub use error::BlockError;
pub use footprint::{construct_building, Footprint, Turn};
pub use geodesic::{GeodesicEdge, Point};
pub use polygon::Polygon;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::block::{
        angle_diff, generate, generate_batch, select_turn, turn_toward, BlockGenerator,
        FeatureOutcome,
    };
    pub use crate::cfg::BlockParams;
    pub use crate::error::BlockError;
    pub use crate::footprint::{construct_building, Footprint, Turn};
    pub use crate::geodesic::{direct, inverse, Direct, GeodesicEdge, Inverse, Point};
    pub use crate::jitter::{Jitter, UniformSource};
    pub use crate::polygon::Polygon;
}
