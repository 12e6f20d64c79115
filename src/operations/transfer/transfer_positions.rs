use tracing::debug;

use crate::error::{Result, SelectionError, Side};
use crate::math::{invert_affine, transform_point, Point3};
use crate::operations::selection::SpaceMode;
use crate::operations::walk::CorrespondenceMap;
use crate::scene::{MeshId, Scene};
use crate::topology::VertexId;

/// Moves target vertices onto the positions of their mapped source vertices.
///
/// Only target vertices that appear as a value in the map are touched.
pub struct TransferPositions<'a> {
    source: MeshId,
    target: MeshId,
    map: &'a CorrespondenceMap,
    space: SpaceMode,
}

impl<'a> TransferPositions<'a> {
    /// Creates a new `TransferPositions` operation.
    #[must_use]
    pub fn new(source: MeshId, target: MeshId, map: &'a CorrespondenceMap, space: SpaceMode) -> Self {
        Self {
            source,
            target,
            map,
            space,
        }
    }

    /// Executes the transfer, modifying the target mesh in place.
    ///
    /// In [`SpaceMode::World`] each source position is taken to world space
    /// with the source transform and brought back with the inverse of the
    /// target transform. In [`SpaceMode::Object`] local coordinates are copied.
    /// Every new position is computed before any is written, so on error the
    /// target mesh is unchanged. Returns the number of vertices moved.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownMesh`] if a handle does not resolve,
    /// a topology error if the map names a vertex outside either mesh, or
    /// [`TransformError::NonInvertible`](crate::error::TransformError::NonInvertible)
    /// in world space when the target transform is singular.
    pub fn execute(&self, scene: &mut Scene) -> Result<usize> {
        let updates = self.compute(scene)?;

        let mesh = &mut scene.object_mut(self.target)?.mesh;
        for &(id, point) in &updates {
            mesh.vertex_mut(id)?.point = point;
        }
        debug!(moved = updates.len(), space = %self.space, "positions written");
        Ok(updates.len())
    }

    /// Resolves every mapped target vertex and its new position.
    fn compute(&self, scene: &Scene) -> Result<Vec<(VertexId, Point3)>> {
        let source = scene
            .object(self.source)
            .map_err(|_| SelectionError::UnknownMesh { side: Side::Source })?;
        let target = scene
            .object(self.target)
            .map_err(|_| SelectionError::UnknownMesh { side: Side::Target })?;

        let to_target_local = match self.space {
            SpaceMode::World => Some(invert_affine(&target.world)?),
            SpaceMode::Object => None,
        };

        let inverse = self.map.inverted();
        let mut updates = Vec::with_capacity(inverse.len());
        for (target_index, source_index) in inverse.iter() {
            let id = target.mesh.vertex_id(target_index)?;
            let local = source.mesh.vertex(source.mesh.vertex_id(source_index)?)?.point;
            let point = match &to_target_local {
                Some(inverse_world) => transform_point(inverse_world, &transform_point(&source.world, &local)),
                None => local,
            };
            updates.push((id, point));
        }
        Ok(updates)
    }
}
