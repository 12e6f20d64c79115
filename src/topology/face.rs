use super::edge::EdgeId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in a [`PolyMesh`](super::PolyMesh).
    pub struct FaceId;
}

/// Data associated with a polygonal face.
///
/// `edges[i]` joins `vertices[i]` and `vertices[(i + 1) % len]`.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Position of the face within its mesh's input ordering.
    pub index: usize,
    /// The cyclic boundary loop.
    pub vertices: Vec<VertexId>,
    /// The edges of the boundary loop.
    pub edges: Vec<EdgeId>,
}

impl FaceData {
    /// Returns `true` if `vertex` lies on the boundary loop.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for faces built through [`BuildMesh`](crate::operations::creation::BuildMesh).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
