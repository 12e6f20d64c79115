use std::collections::HashSet;

use crate::error::Result;
use crate::topology::{EdgeId, FaceData, FaceId, PolyMesh, VertexId};

/// Directional walk state: two edge-adjacent vertices on one face boundary.
///
/// `current` is the vertex being extended from; `previous` keeps the walk
/// from stepping backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexPair {
    pub previous: VertexId,
    pub current: VertexId,
}

impl VertexPair {
    #[must_use]
    pub fn new(previous: VertexId, current: VertexId) -> Self {
        Self { previous, current }
    }

    /// The pair one step further along, ending at `next`.
    #[must_use]
    pub fn advance(self, next: VertexId) -> Self {
        Self::new(self.current, next)
    }
}

/// One step around a face: the edge walked and the pair it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStep {
    pub edge: EdgeId,
    pub pair: VertexPair,
}

/// Why a face loop stopped producing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    /// The walk came back to a vertex it already left.
    Closed,
    /// No edge continued the walk (malformed face).
    DeadEnd,
}

/// Finds the edge of `face` that continues the walk past `pair.current`.
///
/// The edge must touch `pair.current`, and its other endpoint must be on the
/// face boundary and differ from `pair.previous`. Edges are tried in loop
/// order, so a malformed face with several candidates yields the first.
#[must_use]
pub fn next_step(mesh: &PolyMesh, face: &FaceData, pair: VertexPair) -> Option<(EdgeId, VertexId)> {
    face.edges.iter().find_map(|&edge_id| {
        let other = mesh.edge(edge_id).ok()?.other_vertex(pair.current)?;
        (other != pair.previous && face.contains_vertex(other)).then_some((edge_id, other))
    })
}

/// Walks once around a face boundary, yielding a [`FaceStep`] per edge.
///
/// Starting from a seed pair, each step moves `current` to the next vertex.
/// The walk ends when it would extend from a vertex it has already extended
/// from, or when [`next_step`] finds nothing. A well-formed n-gon yields n
/// steps, the last one walking the seed edge again.
pub struct FaceLoop<'a> {
    mesh: &'a PolyMesh,
    face: &'a FaceData,
    pair: VertexPair,
    seen: HashSet<VertexId>,
    end: Option<LoopEnd>,
}

impl<'a> FaceLoop<'a> {
    /// Starts a walk around `face` from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found in the mesh.
    pub fn new(mesh: &'a PolyMesh, face: FaceId, seed: VertexPair) -> Result<Self> {
        let face = mesh.face(face)?;
        Ok(Self {
            mesh,
            face,
            pair: seed,
            seen: HashSet::with_capacity(face.len()),
            end: None,
        })
    }

    /// How the walk ended, or `None` while it is still running.
    #[must_use]
    pub fn end(&self) -> Option<LoopEnd> {
        self.end
    }
}

impl Iterator for FaceLoop<'_> {
    type Item = FaceStep;

    fn next(&mut self) -> Option<FaceStep> {
        if self.end.is_some() {
            return None;
        }
        if self.seen.contains(&self.pair.current) {
            self.end = Some(LoopEnd::Closed);
            return None;
        }
        let Some((edge, next)) = next_step(self.mesh, self.face, self.pair) else {
            self.end = Some(LoopEnd::DeadEnd);
            return None;
        };
        self.seen.insert(self.pair.current);
        self.pair = self.pair.advance(next);
        Some(FaceStep {
            edge,
            pair: self.pair,
        })
    }
}

/// Collects a whole face loop.
///
/// # Errors
///
/// Returns an error if the face is not found in the mesh.
pub fn walk_face(mesh: &PolyMesh, face: FaceId, seed: VertexPair) -> Result<(Vec<FaceStep>, LoopEnd)> {
    let mut walk = FaceLoop::new(mesh, face, seed)?;
    let steps: Vec<FaceStep> = walk.by_ref().collect();
    Ok((steps, walk.end().unwrap_or(LoopEnd::DeadEnd)))
}
