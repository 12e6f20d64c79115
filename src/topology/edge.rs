use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in a [`PolyMesh`](super::PolyMesh).
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// An edge connects two vertices and records every face whose boundary
/// loop contains it (its link faces).
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Creation order of the edge within its mesh.
    pub index: usize,
    /// First endpoint, in the order the edge was first seen.
    pub start: VertexId,
    /// Second endpoint.
    pub end: VertexId,
    /// Faces bordering this edge, in face order.
    pub faces: Vec<FaceId>,
}

impl EdgeData {
    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` if `vertex` is not
    /// an endpoint of this edge.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        if self.start == vertex {
            Some(self.end)
        } else if self.end == vertex {
            Some(self.start)
        } else {
            None
        }
    }

    /// Returns `true` if a walk may cross this edge into a neighboring face.
    ///
    /// Only edges shared by exactly two faces are crossable. Edges with a
    /// single link face are boundary edges, and edges with more than two are
    /// non-manifold and treated like a boundary.
    #[must_use]
    pub fn is_crossable(&self) -> bool {
        self.faces.len() == 2
    }
}
