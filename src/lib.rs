//! Vertex correspondence between two polygon meshes by walking their faces
//! in lockstep from a seeded face and edge, and transfer of vertex positions
//! through that correspondence.
//!
//! ```
//! use meshwalk::math::Point3;
//! use meshwalk::operations::creation::MakeBox;
//! use meshwalk::operations::selection::{MeshSeed, SeedInput, SpaceMode};
//! use meshwalk::operations::transfer::MovePositions;
//! use meshwalk::scene::{MeshObject, Scene};
//!
//! let mut scene = Scene::new();
//! let source = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).execute()?;
//! let target = MakeBox::new(Point3::origin(), Point3::new(3.0, 2.0, 1.0)).execute()?;
//! let a = scene.add(MeshObject::new("A", source));
//! let b = scene.add(MeshObject::new("B", target));
//!
//! let seed = SeedInput::new(MeshSeed::new(a, 0, 4, 6), MeshSeed::new(b, 0, 4, 6))
//!     .with_space(SpaceMode::Object);
//! let report = MovePositions::new(seed).execute(&mut scene)?;
//! assert_eq!(report.moved, 8);
//! # Ok::<(), meshwalk::WalkerError>(())
//! ```

pub mod error;
pub mod math;
pub mod operations;
pub mod scene;
pub mod topology;

pub use error::{Result, WalkerError};
