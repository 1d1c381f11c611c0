//! Generation parameters and fixed tolerances.
//!
//! Policy
//! - Tolerances are constants; only the three user-facing lengths and the
//!   ring-closure switch are configurable.

use crate::error::BlockError;
use crate::jitter::Jitter;

/// Upper bound (metres) on the leftover that a segmentation step absorbs by
/// snapping to the parent edge's end point instead of leaving a sliver.
pub(crate) const SNAP_EPS: f64 = 1e-6;

/// The snap tolerance never exceeds this fraction of the shortest possible step.
pub(crate) const SNAP_REL: f64 = 1e-3;

/// Block-generation parameters.
///
/// Defaults follow the original generator: 1 m frontage, ±10 % jitter, 1 m depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockParams {
    /// Desired frontage width per footprint (metres, > 0).
    pub target_segment_length: f64,
    /// Maximum relative deviation from the target length, in `[0, 1)`.
    pub variation_fraction: f64,
    /// Depth of each footprint (metres, > 0).
    pub footprint_depth: f64,
    /// Also process the edge from the last vertex back to the first.
    /// Off by default: the closing side of every block stays empty.
    pub close_ring: bool,
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            target_segment_length: 1.0,
            variation_fraction: 0.1,
            footprint_depth: 1.0,
            close_ring: false,
        }
    }
}

impl BlockParams {
    pub fn validate(&self) -> Result<(), BlockError> {
        self.jitter()?;
        validate_depth(self.footprint_depth)
    }

    pub(crate) fn jitter(&self) -> Result<Jitter, BlockError> {
        Jitter::new(self.target_segment_length, self.variation_fraction)
    }
}

pub(crate) fn validate_depth(depth: f64) -> Result<(), BlockError> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(BlockError::invalid_param(format!(
            "footprint depth must be finite and > 0 (got {depth})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BlockParams::default().validate().is_ok());
    }

    #[test]
    fn each_field_is_checked() {
        let base = BlockParams::default();
        let bad = [
            BlockParams {
                target_segment_length: 0.0,
                ..base
            },
            BlockParams {
                variation_fraction: 1.0,
                ..base
            },
            BlockParams {
                footprint_depth: -1.0,
                ..base
            },
            BlockParams {
                footprint_depth: f64::INFINITY,
                ..base
            },
        ];
        for p in bad {
            assert!(
                matches!(p.validate(), Err(BlockError::InvalidParameter { .. })),
                "{p:?} should be rejected"
            );
        }
    }
}
