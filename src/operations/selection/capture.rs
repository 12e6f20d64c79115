use crate::error::{Result, SelectionError, Side};
use crate::scene::MeshId;

use super::seed::{MeshSeed, SeedInput, SpaceMode};

/// Selection state captured on one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SideCapture {
    mesh: Option<MeshId>,
    face: Option<usize>,
    first: Option<usize>,
    second: Option<usize>,
}

impl SideCapture {
    fn build(&self, side: Side) -> Result<MeshSeed> {
        let missing = |field| SelectionError::Missing { side, field };
        let mesh = self.mesh.ok_or_else(|| missing("mesh"))?;
        let face = self.face.ok_or_else(|| missing("face"))?;
        let first = self.first.ok_or_else(|| missing("first vertex"))?;
        let second = self.second.ok_or_else(|| missing("second vertex"))?;
        Ok(MeshSeed::new(mesh, face, first, second))
    }
}

/// Host-side accumulator for the seed selection.
///
/// A host calls one capture method per user step, passing whatever is
/// currently selected in the active mesh. Each step accepts exactly one
/// element; anything else is reported and leaves the captured state as it
/// was. The mesh recorded for a side is the one from its latest capture.
#[derive(Debug, Clone, Default)]
pub struct SeedCapture {
    source: SideCapture,
    target: SideCapture,
    space: SpaceMode,
}

impl SeedCapture {
    /// Creates an empty capture in world space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the seed face from the current face selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Cardinality`] unless exactly one face is selected.
    pub fn capture_face(&mut self, side: Side, mesh: MeshId, selected: &[usize]) -> Result<()> {
        let face = exactly_one("face", selected)?;
        let capture = self.side_mut(side);
        capture.face = Some(face);
        capture.mesh = Some(mesh);
        Ok(())
    }

    /// Captures the first seed vertex from the current vertex selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Cardinality`] unless exactly one vertex is selected.
    pub fn capture_first_vertex(&mut self, side: Side, mesh: MeshId, selected: &[usize]) -> Result<()> {
        let vertex = exactly_one("vertex", selected)?;
        let capture = self.side_mut(side);
        capture.first = Some(vertex);
        capture.mesh = Some(mesh);
        Ok(())
    }

    /// Captures the second seed vertex, a neighbor of the first on the same face.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Cardinality`] unless exactly one vertex is selected.
    pub fn capture_second_vertex(&mut self, side: Side, mesh: MeshId, selected: &[usize]) -> Result<()> {
        let vertex = exactly_one("vertex", selected)?;
        let capture = self.side_mut(side);
        capture.second = Some(vertex);
        capture.mesh = Some(mesh);
        Ok(())
    }

    /// Sets the transfer space.
    pub fn set_space(&mut self, space: SpaceMode) {
        self.space = space;
    }

    /// Forgets every captured value. The space mode is kept.
    pub fn clear(&mut self) {
        self.source = SideCapture::default();
        self.target = SideCapture::default();
    }

    /// Freezes the captured values into a [`SeedInput`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Missing`] naming the first field not yet captured.
    pub fn build(&self) -> Result<SeedInput> {
        let source = self.source.build(Side::Source)?;
        let target = self.target.build(Side::Target)?;
        Ok(SeedInput::new(source, target).with_space(self.space))
    }

    fn side_mut(&mut self, side: Side) -> &mut SideCapture {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }
}

fn exactly_one(element: &'static str, selected: &[usize]) -> Result<usize> {
    match selected {
        [only] => Ok(*only),
        _ => Err(SelectionError::Cardinality {
            element,
            count: selected.len(),
        }
        .into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WalkerError;
    use crate::scene::{MeshObject, Scene};
    use crate::topology::PolyMesh;

    fn handles() -> (MeshId, MeshId) {
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("A", PolyMesh::new()));
        let b = scene.add(MeshObject::new("B", PolyMesh::new()));
        (a, b)
    }

    fn full_capture(a: MeshId, b: MeshId) -> SeedCapture {
        let mut capture = SeedCapture::new();
        capture.capture_face(Side::Source, a, &[3]).unwrap();
        capture.capture_first_vertex(Side::Source, a, &[0]).unwrap();
        capture.capture_second_vertex(Side::Source, a, &[1]).unwrap();
        capture.capture_face(Side::Target, b, &[7]).unwrap();
        capture.capture_first_vertex(Side::Target, b, &[10]).unwrap();
        capture.capture_second_vertex(Side::Target, b, &[11]).unwrap();
        capture
    }

    #[test]
    fn full_capture_builds_seed() {
        let (a, b) = handles();
        let mut capture = full_capture(a, b);
        capture.set_space(SpaceMode::Object);

        let seed = capture.build().unwrap();
        assert_eq!(seed.source, MeshSeed::new(a, 3, 0, 1));
        assert_eq!(seed.target, MeshSeed::new(b, 7, 10, 11));
        assert_eq!(seed.space, SpaceMode::Object);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let (a, _) = handles();
        let mut capture = SeedCapture::new();
        let result = capture.capture_face(Side::Source, a, &[]);
        assert!(matches!(
            result,
            Err(WalkerError::Selection(SelectionError::Cardinality {
                element: "face",
                count: 0
            }))
        ));
    }

    #[test]
    fn multiple_selection_is_rejected_and_keeps_state() {
        let (a, b) = handles();
        let mut capture = full_capture(a, b);
        let result = capture.capture_first_vertex(Side::Target, b, &[4, 5]);
        assert!(matches!(
            result,
            Err(WalkerError::Selection(SelectionError::Cardinality {
                element: "vertex",
                count: 2
            }))
        ));
        assert_eq!(capture.build().unwrap().target.vertices, [10, 11]);
    }

    #[test]
    fn missing_field_is_named() {
        let (a, _) = handles();
        let mut capture = SeedCapture::new();
        capture.capture_face(Side::Source, a, &[0]).unwrap();
        capture.capture_first_vertex(Side::Source, a, &[0]).unwrap();
        let result = capture.build();
        assert!(matches!(
            result,
            Err(WalkerError::Selection(SelectionError::Missing {
                side: Side::Source,
                field: "second vertex"
            }))
        ));
    }

    #[test]
    fn latest_capture_sets_the_mesh() {
        let (a, b) = handles();
        let mut capture = full_capture(a, b);
        capture.capture_second_vertex(Side::Source, b, &[2]).unwrap();
        assert_eq!(capture.build().unwrap().source.mesh, b);
    }

    #[test]
    fn clear_forgets_everything_but_space() {
        let (a, b) = handles();
        let mut capture = full_capture(a, b);
        capture.set_space(SpaceMode::Object);
        capture.clear();
        assert!(matches!(
            capture.build(),
            Err(WalkerError::Selection(SelectionError::Missing {
                side: Side::Source,
                field: "mesh"
            }))
        ));
        capture.capture_face(Side::Source, a, &[0]).unwrap();
        assert_eq!(capture.space, SpaceMode::Object);
    }
}
