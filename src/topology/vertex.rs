use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a [`PolyMesh`](super::PolyMesh).
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position of the vertex within its mesh's input ordering.
    pub index: usize,
    /// The 3D position of the vertex in the mesh's local space.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(index: usize, point: Point3) -> Self {
        Self { index, point }
    }
}
