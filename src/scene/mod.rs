//! Named mesh objects with their placement in world space.

use crate::error::TopologyError;
use crate::math::Matrix4;
use crate::topology::PolyMesh;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a mesh object stored in a [`Scene`].
    pub struct MeshId;
}

/// A mesh together with its local-to-world transform.
#[derive(Debug, Clone)]
pub struct MeshObject {
    /// Display name of the object.
    pub name: String,
    /// Geometry and adjacency in local space.
    pub mesh: PolyMesh,
    /// Local-to-world affine transform. Only consulted in world space mode.
    pub world: Matrix4,
}

impl MeshObject {
    /// Creates an object placed at the world origin.
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: PolyMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            world: Matrix4::identity(),
        }
    }

    /// Sets the local-to-world transform.
    #[must_use]
    pub fn with_world(mut self, world: Matrix4) -> Self {
        self.world = world;
        self
    }
}

/// Arena of mesh objects addressed by typed handles.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<MeshId, MeshObject>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object and returns its handle.
    pub fn add(&mut self, object: MeshObject) -> MeshId {
        self.objects.insert(object)
    }

    /// Returns a reference to the object, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or foreign.
    pub fn object(&self, id: MeshId) -> Result<&MeshObject, TopologyError> {
        self.objects
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh object".into()))
    }

    /// Returns a mutable reference to the object, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or foreign.
    pub fn object_mut(&mut self, id: MeshId) -> Result<&mut MeshObject, TopologyError> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh object".into()))
    }

    /// Returns `true` if the handle resolves.
    #[must_use]
    pub fn contains(&self, id: MeshId) -> bool {
        self.objects.contains_key(id)
    }

    /// Removes an object, invalidating its handle.
    pub fn remove(&mut self, id: MeshId) -> Option<MeshObject> {
        self.objects.remove(id)
    }

    /// Looks up an object by name. Intended for resolving a host-side name
    /// into a handle once, before any operation runs.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<MeshId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn find_resolves_name_to_handle() {
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("A", PolyMesh::new()));
        let b = scene.add(MeshObject::new("B", PolyMesh::new()));
        assert_eq!(scene.find("A"), Some(a));
        assert_eq!(scene.find("B"), Some(b));
        assert_eq!(scene.find("C"), None);
    }

    #[test]
    fn removed_handle_no_longer_resolves() {
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("A", PolyMesh::new()));
        scene.remove(a);
        assert!(!scene.contains(a));
        assert!(scene.object(a).is_err());
    }
}
