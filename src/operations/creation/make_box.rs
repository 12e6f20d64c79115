use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::topology::PolyMesh;

use super::BuildMesh;

/// Creates an axis-aligned box mesh from two corner points.
///
/// Each side is split into a `divisions` x `divisions` grid of quads.
/// One division gives the 8-vertex cube, two give 26 vertices.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
    divisions: usize,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation with one division per side.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
            divisions: 1,
        }
    }

    /// Sets the number of grid divisions along each box edge.
    #[must_use]
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    /// Executes the operation.
    ///
    /// Vertices are numbered in lattice order (x fastest, then y, then z),
    /// and every face winds counter-clockwise seen from outside.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if `divisions` is zero.
    pub fn execute(&self) -> Result<PolyMesh> {
        let n = self.divisions;
        if n == 0 {
            return Err(
                TopologyError::InvalidTopology("box needs at least one division".into()).into(),
            );
        }

        let extent = self.max_corner - self.min_corner;
        #[allow(clippy::cast_precision_loss)]
        let step = extent / n as f64;

        let mut positions = Vec::new();
        let mut lattice: HashMap<[usize; 3], usize> = HashMap::new();
        for k in 0..=n {
            for j in 0..=n {
                for i in 0..=n {
                    let on_surface = [i, j, k].iter().any(|&c| c == 0 || c == n);
                    if !on_surface {
                        continue;
                    }
                    lattice.insert([i, j, k], positions.len());
                    #[allow(clippy::cast_precision_loss)]
                    positions.push(Point3::new(
                        self.min_corner.x + step.x * i as f64,
                        self.min_corner.y + step.y * j as f64,
                        self.min_corner.z + step.z * k as f64,
                    ));
                }
            }
        }

        let mut faces = Vec::with_capacity(6 * n * n);
        for axis in 0..3 {
            let u_axis = (axis + 1) % 3;
            let v_axis = (axis + 2) % 3;
            for level in [0, n] {
                for v in 0..n {
                    for u in 0..n {
                        let corner = |du: usize, dv: usize| {
                            let mut c = [0; 3];
                            c[axis] = level;
                            c[u_axis] = u + du;
                            c[v_axis] = v + dv;
                            lattice[&c]
                        };
                        let mut quad = vec![corner(0, 0), corner(1, 0), corner(1, 1), corner(0, 1)];
                        // u x v points along +axis; the low side must face the other way.
                        if level == 0 {
                            quad.reverse();
                        }
                        faces.push(quad);
                    }
                }
            }
        }

        BuildMesh::new(positions, faces).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_box(divisions: usize) -> PolyMesh {
        MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .with_divisions(divisions)
            .execute()
            .unwrap()
    }

    // ── Unit cube ──────────────────────────────────────────────

    #[test]
    fn unit_cube_counts() {
        let mesh = unit_box(1);
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_edges(), 12);
        assert_eq!(mesh.num_faces(), 6);
    }

    #[test]
    fn unit_cube_vertices_are_in_lattice_order() {
        let mesh = unit_box(1);
        let positions = mesh.positions();
        assert_eq!(positions[0], p(0.0, 0.0, 0.0));
        assert_eq!(positions[1], p(1.0, 0.0, 0.0));
        assert_eq!(positions[2], p(0.0, 1.0, 0.0));
        assert_eq!(positions[7], p(1.0, 1.0, 1.0));
    }

    #[test]
    fn closed_box_has_no_boundary_edges() {
        for divisions in 1..=3 {
            let mesh = unit_box(divisions);
            for f in 0..mesh.num_faces() {
                let fid = mesh.face_id(f).unwrap();
                for &eid in &mesh.face(fid).unwrap().edges {
                    assert!(mesh.opposite_face(eid, fid).unwrap().is_some());
                }
            }
        }
    }

    // ── Subdivided ─────────────────────────────────────────────

    #[test]
    fn two_divisions_give_26_vertices() {
        let mesh = unit_box(2);
        assert_eq!(mesh.num_vertices(), 26);
        assert_eq!(mesh.num_faces(), 24);
        assert_eq!(mesh.num_edges(), 48);
    }

    #[test]
    fn euler_characteristic_is_two() {
        for divisions in 1..=4 {
            let mesh = unit_box(divisions);
            let euler = mesh.num_vertices() + mesh.num_faces() - mesh.num_edges();
            assert_eq!(euler, 2, "divisions = {divisions}");
        }
    }

    #[test]
    fn zero_divisions_is_rejected() {
        let result = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .with_divisions(0)
            .execute();
        assert!(result.is_err());
    }
}
