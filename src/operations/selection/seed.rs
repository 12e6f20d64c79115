use std::fmt;

use crate::error::{Result, SelectionError, Side};
use crate::scene::MeshId;
use crate::topology::{FaceId, PolyMesh, VertexId};

/// Coordinate space in which positions are transferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpaceMode {
    /// Source positions are taken to world space and re-expressed in the
    /// target's local space.
    #[default]
    World,
    /// Local coordinates are copied as-is.
    Object,
}

impl fmt::Display for SpaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => f.write_str("world"),
            Self::Object => f.write_str("object"),
        }
    }
}

/// The seed selection on one mesh: a face and two edge-adjacent vertices
/// on its boundary, all given as indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSeed {
    /// Handle of the mesh object.
    pub mesh: MeshId,
    /// Index of the seed face.
    pub face: usize,
    /// Indices of the first and second seed vertex, in walking order.
    pub vertices: [usize; 2],
}

impl MeshSeed {
    /// Creates a new seed.
    #[must_use]
    pub fn new(mesh: MeshId, face: usize, first: usize, second: usize) -> Self {
        Self {
            mesh,
            face,
            vertices: [first, second],
        }
    }

    /// Resolves the indices against `mesh` and checks that both vertices lie
    /// on the face and share one of its edges.
    ///
    /// # Errors
    ///
    /// Returns a topology error if an index is out of range, or a
    /// [`SelectionError`] if the vertices do not fit the face.
    pub fn resolve(&self, mesh: &PolyMesh, side: Side) -> Result<ResolvedSeed> {
        let face = mesh.face_id(self.face)?;
        let first = mesh.vertex_id(self.vertices[0])?;
        let second = mesh.vertex_id(self.vertices[1])?;
        let face_data = mesh.face(face)?;

        for (id, index) in [(first, self.vertices[0]), (second, self.vertices[1])] {
            if !face_data.contains_vertex(id) {
                return Err(SelectionError::VertexNotOnFace {
                    side,
                    vertex: index,
                    face: self.face,
                }
                .into());
            }
        }

        let adjacent = first != second
            && mesh
                .find_edge(first, second)
                .is_some_and(|edge| face_data.edges.contains(&edge));
        if !adjacent {
            return Err(SelectionError::NotAdjacent {
                side,
                first: self.vertices[0],
                second: self.vertices[1],
                face: self.face,
            }
            .into());
        }

        Ok(ResolvedSeed {
            face,
            first,
            second,
        })
    }
}

/// A [`MeshSeed`] resolved to entity IDs of one mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSeed {
    pub face: FaceId,
    pub first: VertexId,
    pub second: VertexId,
}

/// Everything a walk-and-transfer run needs from the selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedInput {
    /// The mesh positions are copied from (mesh A).
    pub source: MeshSeed,
    /// The mesh whose positions change (mesh B).
    pub target: MeshSeed,
    /// Space in which positions are transferred.
    pub space: SpaceMode,
}

impl SeedInput {
    /// Creates a seed in the default (world) space.
    #[must_use]
    pub fn new(source: MeshSeed, target: MeshSeed) -> Self {
        Self {
            source,
            target,
            space: SpaceMode::default(),
        }
    }

    /// Sets the transfer space.
    #[must_use]
    pub fn with_space(mut self, space: SpaceMode) -> Self {
        self.space = space;
        self
    }
}
