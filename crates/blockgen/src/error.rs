//! Error type shared by polygon validation, segmentation and footprint construction.
//!
//! All variants are deterministic input-validation failures. None of them is
//! transient, so callers never retry; batch callers isolate them per feature
//! (see `block::generate_batch`).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum BlockError {
    /// Fewer than 3 vertices, a non-finite coordinate, or a boundary edge
    /// whose start and end coincide.
    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },
    /// Non-positive length/depth or a variation fraction outside `[0, 1)`.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
    /// A zero-length frontage reached footprint construction (azimuth undefined).
    #[error("degenerate frontage: start and end coincide")]
    DegenerateEdge,
}

impl BlockError {
    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_param(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
