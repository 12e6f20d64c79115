pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use vertex::{VertexData, VertexId};

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Arena that owns the vertices, edges and faces of one polygon mesh.
///
/// Entities reference each other via typed IDs (generational indices), so
/// adjacency is expressed as id lists rather than pointers. Topology is fixed
/// once built; only vertex positions may change afterwards.
#[derive(Debug, Default, Clone)]
pub struct PolyMesh {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    vertex_order: Vec<VertexId>,
    face_order: Vec<FaceId>,
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
}

impl PolyMesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertex_order.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.face_order.len()
    }

    // --- Vertex operations ---

    /// Appends a vertex and returns its ID. Its index is the current vertex count.
    pub(crate) fn add_vertex(&mut self, point: Point3) -> VertexId {
        let index = self.vertex_order.len();
        let id = self.vertices.insert(VertexData::new(index, point));
        self.vertex_order.push(id);
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Resolves a vertex index to its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn vertex_id(&self, index: usize) -> Result<VertexId, TopologyError> {
        self.vertex_order
            .get(index)
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound(format!("vertex {index}")))
    }

    /// Iterates vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertex_order
            .iter()
            .filter_map(|&id| self.vertices.get(id).map(|v| (id, v)))
    }

    /// Vertex positions in index order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3> {
        self.vertices().map(|(_, v)| v.point).collect()
    }

    // --- Edge operations ---

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns the edge joining `a` and `b`, in either direction.
    #[must_use]
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Returns the face across `edge` from `face`.
    ///
    /// `None` when the edge is a boundary edge, when it has more than two
    /// link faces, or when `face` does not border it.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge` is not found in the mesh.
    pub fn opposite_face(&self, edge: EdgeId, face: FaceId) -> Result<Option<FaceId>, TopologyError> {
        let data = self.edge(edge)?;
        if !data.is_crossable() || !data.faces.contains(&face) {
            return Ok(None);
        }
        Ok(data.faces.iter().copied().find(|&f| f != face))
    }

    // --- Face operations ---

    /// Appends a face over existing vertices, creating or reusing its edges.
    ///
    /// The caller guarantees at least three distinct, valid vertices.
    pub(crate) fn add_face(&mut self, vertices: Vec<VertexId>) -> FaceId {
        let index = self.face_order.len();
        let id = self.faces.insert(FaceData {
            index,
            vertices: Vec::new(),
            edges: Vec::new(),
        });

        let n = vertices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let next_index = self.edges.len();
            let edge_id = *self.edge_lookup.entry(edge_key(a, b)).or_insert_with(|| {
                self.edges.insert(EdgeData {
                    index: next_index,
                    start: a,
                    end: b,
                    faces: Vec::new(),
                })
            });
            if let Some(edge) = self.edges.get_mut(edge_id) {
                edge.faces.push(id);
            }
            edges.push(edge_id);
        }

        if let Some(face) = self.faces.get_mut(id) {
            face.vertices = vertices;
            face.edges = edges;
        }
        self.face_order.push(id);
        id
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Resolves a face index to its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn face_id(&self, index: usize) -> Result<FaceId, TopologyError> {
        self.face_order
            .get(index)
            .copied()
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face {index}")))
    }
}

/// Direction-independent key for the edge lookup.
fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
