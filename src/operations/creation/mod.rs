mod build_mesh;
mod make_box;

pub use build_mesh::BuildMesh;
pub use make_box::MakeBox;
