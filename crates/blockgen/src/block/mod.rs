//! Block generation: footprints along every boundary edge of one polygon.
//!
//! Purpose
//! - Compose the pieces: centroid once per pass, one turn per edge, jittered
//!   frontages per edge, one footprint per frontage.
//! - Keep a pass a pure function of `(polygon, params, random draws)`; the
//!   polygon is only borrowed.
//!
//! Failure model
//! - `Footprints` yields `Result`s. The first error ends the sequence; a
//!   `collect::<Result<Vec<_>, _>>()` stops there as well.
//! - `generate_batch` isolates failures per feature so one bad outline never
//!   aborts its siblings.

mod turn;

pub use turn::{angle_diff, select_turn, turn_toward};

use tracing::{debug, warn};

use crate::cfg::BlockParams;
use crate::error::BlockError;
use crate::footprint::{construct_building, Footprint, Turn};
use crate::geodesic::edge::SegmentWalk;
use crate::geodesic::Point;
use crate::jitter::{Jitter, UniformSource};
use crate::polygon::{BoundaryEdges, Polygon};

/// One validated generation setup for a single polygon.
#[derive(Clone, Debug)]
pub struct BlockGenerator<'p> {
    polygon: &'p Polygon,
    params: BlockParams,
    jitter: Jitter,
    centroid: Point,
}

impl<'p> BlockGenerator<'p> {
    pub fn new(polygon: &'p Polygon, params: BlockParams) -> Result<Self, BlockError> {
        params.validate()?;
        Ok(Self {
            polygon,
            params,
            jitter: params.jitter()?,
            centroid: polygon.centroid(),
        })
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Fresh lazy pass. Re-invoke for a second traversal; with an unseeded
    /// source the jitter differs between passes.
    pub fn footprints<'a, R: UniformSource + ?Sized>(
        &'a self,
        rng: &'a mut R,
    ) -> Footprints<'a, R> {
        let edges = if self.params.close_ring {
            self.polygon.closed_boundary_edges()
        } else {
            self.polygon.boundary_edges()
        };
        Footprints {
            gen: self,
            edges,
            active: None,
            rng,
            edge_index: 0,
            finished: false,
        }
    }
}

/// Lazy footprint sequence of one block pass; see [`BlockGenerator::footprints`].
pub struct Footprints<'a, R: ?Sized> {
    gen: &'a BlockGenerator<'a>,
    edges: BoundaryEdges<'a>,
    active: Option<(SegmentWalk, Turn)>,
    rng: &'a mut R,
    edge_index: usize,
    finished: bool,
}

impl<R: UniformSource + ?Sized> Iterator for Footprints<'_, R> {
    type Item = Result<Footprint, BlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some((walk, turn)) = self.active.as_mut() {
                if let Some(frontage) = walk.step(&mut *self.rng) {
                    let depth = self.gen.params.footprint_depth;
                    let built = construct_building(&frontage, depth, *turn);
                    if built.is_err() {
                        self.finished = true;
                    }
                    return Some(built);
                }
                self.active = None;
            }
            let Some(edge) = self.edges.next() else {
                self.finished = true;
                return None;
            };
            let index = self.edge_index;
            self.edge_index += 1;
            let walk = match SegmentWalk::new(edge, self.gen.jitter) {
                Ok(walk) => walk,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            };
            let turn = turn_toward(&edge, self.gen.centroid);
            debug!(
                edge = index,
                length_m = walk.total(),
                azimuth = edge.azimuth(),
                turn = ?turn,
                "segmenting boundary edge"
            );
            self.active = Some((walk, turn));
        }
    }
}

/// Run one full pass and collect it.
pub fn generate<R: UniformSource + ?Sized>(
    polygon: &Polygon,
    params: BlockParams,
    rng: &mut R,
) -> Result<Vec<Footprint>, BlockError> {
    let gen = BlockGenerator::new(polygon, params)?;
    let footprints = gen.footprints(rng).collect::<Result<Vec<_>, _>>()?;
    debug!(count = footprints.len(), "block generated");
    Ok(footprints)
}

/// Outcome for one input feature of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureOutcome {
    /// Position of the feature in the batch input.
    pub index: usize,
    pub result: Result<Vec<Footprint>, BlockError>,
}

/// Generate every feature independently; failures stay local to their feature.
///
/// Each entry of `rings` is one outline as raw points, so structural problems
/// (too few vertices, repeated vertices) are reported per feature too. All
/// features share `rng` in input order, so a seeded source reproduces the
/// whole batch.
pub fn generate_batch<I, R>(rings: I, params: BlockParams, rng: &mut R) -> Vec<FeatureOutcome>
where
    I: IntoIterator<Item = Vec<Point>>,
    R: UniformSource + ?Sized,
{
    rings
        .into_iter()
        .enumerate()
        .map(|(index, ring)| {
            let result =
                Polygon::new(ring).and_then(|poly| generate(&poly, params, &mut *rng));
            if let Err(err) = &result {
                warn!(feature = index, error = %err, "feature skipped");
            }
            FeatureOutcome { index, result }
        })
        .collect()
}

#[cfg(test)]
mod tests;
