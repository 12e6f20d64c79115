use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::topology::{PolyMesh, VertexId};

/// Builds a [`PolyMesh`] from vertex positions and face vertex loops.
///
/// Vertex and face indices in the result match their positions in the
/// input, so host-side indices can be used to address them directly.
pub struct BuildMesh {
    positions: Vec<Point3>,
    faces: Vec<Vec<usize>>,
}

impl BuildMesh {
    /// Creates a new `BuildMesh` operation.
    #[must_use]
    pub fn new(positions: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self { positions, faces }
    }

    /// Executes the operation, validating every face before building.
    ///
    /// Edges shared by more than two faces are accepted; they are simply
    /// never crossed by a walk.
    ///
    /// # Errors
    ///
    /// Returns a [`TopologyError`] if there are no faces, a face has fewer than
    /// three vertices, references a vertex out of range, or repeats a vertex.
    pub fn execute(&self) -> Result<PolyMesh> {
        if self.faces.is_empty() {
            return Err(TopologyError::EmptyMesh.into());
        }

        for (face, indices) in self.faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(TopologyError::TooFewVertices {
                    face,
                    count: indices.len(),
                }
                .into());
            }
            for (i, &vertex) in indices.iter().enumerate() {
                if vertex >= self.positions.len() {
                    return Err(TopologyError::InvalidVertexIndex { face, vertex }.into());
                }
                if indices[..i].contains(&vertex) {
                    return Err(TopologyError::DegenerateFace { face, vertex }.into());
                }
            }
        }

        let mut mesh = PolyMesh::new();
        let ids: Vec<VertexId> = self
            .positions
            .iter()
            .map(|&point| mesh.add_vertex(point))
            .collect();
        for indices in &self.faces {
            mesh.add_face(indices.iter().map(|&i| ids[i]).collect());
        }
        Ok(mesh)
    }
}
