use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::error::{Result, SelectionError, Side};
use crate::operations::selection::{ResolvedSeed, SeedInput};
use crate::scene::Scene;
use crate::topology::{EdgeId, FaceId, PolyMesh};

use super::correspondence::CorrespondenceMap;
use super::face_loop::{FaceLoop, FaceStep, VertexPair};
use super::mismatch::{FaceMismatch, MismatchKind};

/// When a queued frontier item counts as already processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Skip the item if its source edge was processed, whatever the target
    /// edge. A target edge first reached through such an item is never walked
    /// from there.
    #[default]
    SourceEdge,
    /// Skip the item only if both its source and its target edge were processed.
    BothEdges,
}

/// Tuning for [`DualWalk`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    pub dedup: DedupPolicy,
}

impl WalkOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Frontier items whose vertex pairs were recorded.
    pub processed: usize,
    /// Frontier items dropped as already processed.
    pub skipped: usize,
    /// Processed items that could not cross into a neighboring face on at
    /// least one side.
    pub boundary_stops: usize,
}

/// Result of a [`DualWalk`].
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Source vertex index to target vertex index.
    pub map: CorrespondenceMap,
    /// Face pairs whose walks diverged, in the order they were found.
    pub mismatches: Vec<FaceMismatch>,
    pub stats: WalkStats,
}

/// Builds a vertex correspondence between two meshes by walking their faces
/// in lockstep, outward from a seed face and edge chosen on each.
///
/// Steps around corresponding faces are paired by position only; the two
/// seed pairs fix the rotational direction on each mesh. Every walked edge
/// pair maps its endpoints and, where both edges have a face on the other
/// side, the walk continues there. Later mappings of a source vertex replace
/// earlier ones.
pub struct DualWalk {
    seed: SeedInput,
    options: WalkOptions,
}

impl DualWalk {
    /// Creates a new `DualWalk` operation with default options.
    #[must_use]
    pub fn new(seed: SeedInput) -> Self {
        Self {
            seed,
            options: WalkOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the walk on the meshes the seed refers to.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownMesh`] if a mesh handle does not
    /// resolve, or any error from [`DualWalk::walk_meshes`].
    pub fn execute(&self, scene: &Scene) -> Result<WalkOutcome> {
        let source = scene
            .object(self.seed.source.mesh)
            .map_err(|_| SelectionError::UnknownMesh { side: Side::Source })?;
        let target = scene
            .object(self.seed.target.mesh)
            .map_err(|_| SelectionError::UnknownMesh { side: Side::Target })?;
        self.walk_meshes(&source.mesh, &target.mesh)
    }

    /// Executes the walk on explicit meshes, ignoring the seed's mesh handles.
    ///
    /// Topology mismatches do not fail the walk; they are collected in
    /// [`WalkOutcome::mismatches`].
    ///
    /// # Errors
    ///
    /// Returns an error if a seed index is out of range, or the seed vertices
    /// are not adjacent on the seed face.
    pub fn walk_meshes(&self, source: &PolyMesh, target: &PolyMesh) -> Result<WalkOutcome> {
        let source_seed = self.seed.source.resolve(source, Side::Source)?;
        let target_seed = self.seed.target.resolve(target, Side::Target)?;

        let mut walker = Walker {
            source,
            target,
            options: self.options,
            queue: VecDeque::new(),
            seen_source: HashSet::new(),
            seen_target: HashSet::new(),
            outcome: WalkOutcome::default(),
        };
        walker.run(source_seed, target_seed)?;

        let outcome = walker.outcome;
        debug!(
            mapped = outcome.map.len(),
            mismatches = outcome.mismatches.len(),
            processed = outcome.stats.processed,
            skipped = outcome.stats.skipped,
            boundary_stops = outcome.stats.boundary_stops,
            "dual walk finished"
        );
        Ok(outcome)
    }
}

/// One pending edge pair, with the face each edge was reached through.
struct Frontier {
    source_face: FaceId,
    source: FaceStep,
    target_face: FaceId,
    target: FaceStep,
}

struct Walker<'a> {
    source: &'a PolyMesh,
    target: &'a PolyMesh,
    options: WalkOptions,
    queue: VecDeque<Frontier>,
    seen_source: HashSet<EdgeId>,
    seen_target: HashSet<EdgeId>,
    outcome: WalkOutcome,
}

impl Walker<'_> {
    fn run(&mut self, source_seed: ResolvedSeed, target_seed: ResolvedSeed) -> Result<()> {
        let source_pair = VertexPair::new(source_seed.first, source_seed.second);
        let target_pair = VertexPair::new(target_seed.first, target_seed.second);
        let source_face = self.source.face(source_seed.face)?.index;
        let target_face = self.target.face(target_seed.face)?.index;
        debug!(source_face, target_face, "dual walk started");

        self.record(source_pair, target_pair)?;
        self.walk_face_pair(source_seed.face, source_pair, target_seed.face, target_pair)?;

        while let Some(item) = self.queue.pop_front() {
            let source_seen = self.seen_source.contains(&item.source.edge);
            let skip = match self.options.dedup {
                DedupPolicy::SourceEdge => source_seen,
                DedupPolicy::BothEdges => source_seen && self.seen_target.contains(&item.target.edge),
            };
            if skip {
                self.outcome.stats.skipped += 1;
                continue;
            }
            self.seen_source.insert(item.source.edge);
            self.seen_target.insert(item.target.edge);
            self.outcome.stats.processed += 1;
            trace!(
                source_edge = ?item.source.edge,
                target_edge = ?item.target.edge,
                "processing edge pair"
            );

            self.record(item.source.pair, item.target.pair)?;

            let across_source = self.source.opposite_face(item.source.edge, item.source_face)?;
            let across_target = self.target.opposite_face(item.target.edge, item.target_face)?;
            match (across_source, across_target) {
                (Some(source_face), Some(target_face)) => {
                    self.walk_face_pair(source_face, item.source.pair, target_face, item.target.pair)?;
                }
                _ => self.outcome.stats.boundary_stops += 1,
            }
        }
        Ok(())
    }

    /// Maps both vertices of the source pair onto the target pair.
    fn record(&mut self, source: VertexPair, target: VertexPair) -> Result<()> {
        let map = &mut self.outcome.map;
        map.insert(
            self.source.vertex(source.previous)?.index,
            self.target.vertex(target.previous)?.index,
        );
        map.insert(
            self.source.vertex(source.current)?.index,
            self.target.vertex(target.current)?.index,
        );
        Ok(())
    }

    /// Walks two faces in lockstep, queueing each matched step pair.
    ///
    /// Stops at the first step where only one side can continue, or where the
    /// two walks end for different reasons, and records a mismatch.
    fn walk_face_pair(
        &mut self,
        source_face: FaceId,
        source_pair: VertexPair,
        target_face: FaceId,
        target_pair: VertexPair,
    ) -> Result<()> {
        let mut source_loop = FaceLoop::new(self.source, source_face, source_pair)?;
        let mut target_loop = FaceLoop::new(self.target, target_face, target_pair)?;
        let mut matched_steps = 0;

        loop {
            match (source_loop.next(), target_loop.next()) {
                (Some(source), Some(target)) => {
                    self.queue.push_back(Frontier {
                        source_face,
                        source,
                        target_face,
                        target,
                    });
                    matched_steps += 1;
                }
                (None, None) if source_loop.end() == target_loop.end() => return Ok(()),
                _ => {
                    let mismatch = FaceMismatch {
                        source_face: self.source.face(source_face)?.index,
                        target_face: self.target.face(target_face)?.index,
                        kind: MismatchKind::from_ends(source_loop.end(), target_loop.end()),
                        matched_steps,
                    };
                    warn!(
                        source_face = mismatch.source_face,
                        target_face = mismatch.target_face,
                        kind = ?mismatch.kind,
                        matched_steps,
                        "face mismatch found"
                    );
                    self.outcome.mismatches.push(mismatch);
                    return Ok(());
                }
            }
        }
    }
}
