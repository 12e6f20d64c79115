mod capture;
mod seed;

pub use capture::SeedCapture;
pub use seed::{MeshSeed, ResolvedSeed, SeedInput, SpaceMode};
