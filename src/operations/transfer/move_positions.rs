use std::fmt;

use tracing::info;

use crate::error::Result;
use crate::operations::selection::{SeedInput, SpaceMode};
use crate::operations::walk::{CorrespondenceMap, DualWalk, FaceMismatch, WalkOptions, WalkStats};
use crate::scene::Scene;

use super::TransferPositions;

/// What a [`MovePositions`] run did.
#[derive(Debug, Clone)]
pub struct TransferReport {
    /// Space the positions were transferred in.
    pub space: SpaceMode,
    /// Number of target vertices written.
    pub moved: usize,
    /// The correspondence the transfer used.
    pub mapping: CorrespondenceMap,
    /// Face pairs whose walks diverged. Non-empty does not mean failure.
    pub mismatches: Vec<FaceMismatch>,
    pub stats: WalkStats,
}

impl TransferReport {
    /// Summary line for the user.
    #[must_use]
    pub fn message(&self) -> String {
        format!("vertex positions updated in {} space", self.space)
    }
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Walks both seed meshes to build a correspondence, then moves the target
/// vertices onto the source positions in the seed's space.
///
/// The target mesh is written once, after the walk finishes, and not at all
/// if any step fails.
pub struct MovePositions {
    seed: SeedInput,
    options: WalkOptions,
}

impl MovePositions {
    /// Creates a new `MovePositions` operation with default walk options.
    #[must_use]
    pub fn new(seed: SeedInput) -> Self {
        Self {
            seed,
            options: WalkOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the walk and the transfer.
    ///
    /// # Errors
    ///
    /// Returns a selection error if the seed does not resolve or fit its
    /// faces, or a transform error if world space is requested and the
    /// target transform is singular. Topology mismatches are reported in
    /// [`TransferReport::mismatches`] instead.
    pub fn execute(&self, scene: &mut Scene) -> Result<TransferReport> {
        let outcome = DualWalk::new(self.seed)
            .with_options(self.options)
            .execute(scene)?;

        let moved = TransferPositions::new(
            self.seed.source.mesh,
            self.seed.target.mesh,
            &outcome.map,
            self.seed.space,
        )
        .execute(scene)?;

        let report = TransferReport {
            space: self.seed.space,
            moved,
            mapping: outcome.map,
            mismatches: outcome.mismatches,
            stats: outcome.stats,
        };
        info!(
            moved,
            mismatches = report.mismatches.len(),
            "{}",
            report.message()
        );
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{TransformError, WalkerError};
    use crate::math::{Matrix4, Point3, Vector3};
    use crate::operations::creation::{BuildMesh, MakeBox};
    use crate::operations::selection::MeshSeed;
    use crate::scene::{MeshId, MeshObject};
    use crate::topology::PolyMesh;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn cube(min: Point3, max: Point3, divisions: usize) -> PolyMesh {
        MakeBox::new(min, max).with_divisions(divisions).execute().unwrap()
    }

    /// A unit cube and a larger, shifted cube with identical numbering,
    /// both seeded on face 0 edge 4-6.
    fn cube_pair(space: SpaceMode) -> (Scene, MeshId, MeshId, SeedInput) {
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("A", cube(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), 1)));
        let b = scene.add(MeshObject::new("B", cube(p(2.0, 2.0, 2.0), p(5.0, 4.0, 3.0), 1)));
        let seed = SeedInput::new(MeshSeed::new(a, 0, 4, 6), MeshSeed::new(b, 0, 4, 6)).with_space(space);
        (scene, a, b, seed)
    }

    #[test]
    fn isomorphic_cubes_copy_every_position() {
        let (mut scene, a, b, seed) = cube_pair(SpaceMode::Object);
        let report = MovePositions::new(seed).execute(&mut scene).unwrap();

        assert_eq!(report.moved, 8);
        assert!(report.mismatches.is_empty());
        assert_eq!(
            scene.object(b).unwrap().mesh.positions(),
            scene.object(a).unwrap().mesh.positions()
        );
        assert_eq!(report.to_string(), "vertex positions updated in object space");
    }

    #[test]
    fn running_twice_changes_nothing_more() {
        let (mut scene, _, b, seed) = cube_pair(SpaceMode::Object);
        MovePositions::new(seed).execute(&mut scene).unwrap();
        let once = scene.object(b).unwrap().mesh.positions();
        MovePositions::new(seed).execute(&mut scene).unwrap();
        assert_eq!(scene.object(b).unwrap().mesh.positions(), once);
    }

    #[test]
    fn world_space_follows_source_placement() {
        let (mut scene, a, b, seed) = cube_pair(SpaceMode::World);
        scene.object_mut(a).unwrap().world = Matrix4::new_translation(&Vector3::new(0.0, 10.0, 0.0));

        let report = MovePositions::new(seed).execute(&mut scene).unwrap();
        assert_eq!(report.message(), "vertex positions updated in world space");

        let source = scene.object(a).unwrap().mesh.positions();
        let target = scene.object(b).unwrap().mesh.positions();
        for (s, t) in source.iter().zip(&target) {
            assert_relative_eq!(*t, *s + Vector3::new(0.0, 10.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn equal_transforms_make_spaces_agree() {
        let world = Matrix4::new_translation(&Vector3::new(-3.0, 1.0, 2.0)) * Matrix4::new_scaling(0.5);
        let run = |space| {
            let (mut scene, a, b, seed) = cube_pair(space);
            scene.object_mut(a).unwrap().world = world;
            scene.object_mut(b).unwrap().world = world;
            MovePositions::new(seed).execute(&mut scene).unwrap();
            scene.object(b).unwrap().mesh.positions()
        };
        let via_world = run(SpaceMode::World);
        let via_object = run(SpaceMode::Object);
        for (w, o) in via_world.iter().zip(&via_object) {
            assert_relative_eq!(*w, *o, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_target_aborts_without_writing() {
        let (mut scene, _, b, seed) = cube_pair(SpaceMode::World);
        scene.object_mut(b).unwrap().world = Matrix4::zeros();
        let before = scene.object(b).unwrap().mesh.positions();

        let result = MovePositions::new(seed).execute(&mut scene);
        assert!(matches!(
            result,
            Err(WalkerError::Transform(TransformError::NonInvertible))
        ));
        assert_eq!(scene.object(b).unwrap().mesh.positions(), before);
    }

    #[test]
    fn bad_seed_aborts_without_writing() {
        let (mut scene, a, b, _) = cube_pair(SpaceMode::Object);
        let before = scene.object(b).unwrap().mesh.positions();
        // 4 and 2 are diagonal on face 0.
        let seed = SeedInput::new(MeshSeed::new(a, 0, 4, 6), MeshSeed::new(b, 0, 4, 2));
        assert!(MovePositions::new(seed).execute(&mut scene).is_err());
        assert_eq!(scene.object(b).unwrap().mesh.positions(), before);
    }

    #[test]
    fn cube_onto_subdivided_cube() {
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("cube", cube(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0), 1)));
        let b = scene.add(MeshObject::new("subdivided", cube(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), 2)));
        let before = scene.object(b).unwrap().mesh.positions();
        assert_eq!(before.len(), 26);

        // Face 0 of A is the x = 0 side looping 4, 6, 2, 0. Face 0 of B is the
        // quarter of its x = 0 side at the origin, looping 9, 12, 3, 0. Seed
        // both at the origin, heading along +y.
        let seed = SeedInput::new(MeshSeed::new(a, 0, 0, 2), MeshSeed::new(b, 0, 0, 3))
            .with_space(SpaceMode::Object);
        let report = MovePositions::new(seed).execute(&mut scene).unwrap();

        let corners: Vec<Point3> = scene.object(a).unwrap().mesh.positions();
        let after = scene.object(b).unwrap().mesh.positions();
        let moved: HashSet<usize> = report.mapping.inverted().iter().map(|(to, _)| to).collect();

        assert_eq!(report.moved, moved.len());
        assert!(moved.contains(&0));
        assert!(moved.len() < 26);
        for (i, point) in after.iter().enumerate() {
            if moved.contains(&i) {
                assert!(corners.contains(point), "vertex {i} moved off the source corners");
            } else {
                assert_eq!(*point, before[i], "unmapped vertex {i} changed");
            }
        }
    }

    #[test]
    fn divergent_face_is_reported_and_unreached_vertices_stay() {
        let flat = |x: f64, y: f64| p(x, y, 0.0);
        let source = BuildMesh::new(
            vec![flat(0.0, 0.0), flat(1.0, 0.0), flat(1.0, 1.0), flat(0.0, 1.0), flat(2.0, 0.5)],
            vec![vec![0, 1, 2, 3], vec![1, 4, 2]],
        )
        .execute()
        .unwrap();
        let target = BuildMesh::new(
            vec![
                flat(0.0, 0.0),
                flat(1.0, 0.0),
                flat(1.0, 1.0),
                flat(0.0, 1.0),
                flat(1.5, -0.5),
                flat(2.0, 0.0),
                flat(2.0, 1.0),
                flat(1.5, 1.5),
            ],
            vec![vec![0, 1, 2, 3], vec![1, 4, 5, 6, 7, 2]],
        )
        .execute()
        .unwrap();
        let mut scene = Scene::new();
        let a = scene.add(MeshObject::new("A", source));
        let b = scene.add(MeshObject::new("B", target));
        let before = scene.object(b).unwrap().mesh.positions();

        let seed = SeedInput::new(MeshSeed::new(a, 0, 0, 1), MeshSeed::new(b, 0, 0, 1))
            .with_space(SpaceMode::Object);
        let report = MovePositions::new(seed).execute(&mut scene).unwrap();

        assert_eq!(report.mismatches.len(), 1);
        let after = scene.object(b).unwrap().mesh.positions();
        assert_eq!(after[4], before[4]);
        assert_eq!(after[5], before[5]);
        // Triangle apex lands where the walk paired it.
        assert_eq!(after[7], flat(2.0, 0.5));
    }
}
