mod correspondence;
mod dual_walk;
mod face_loop;
mod mismatch;

pub use correspondence::CorrespondenceMap;
pub use dual_walk::{DedupPolicy, DualWalk, WalkOptions, WalkOutcome, WalkStats};
pub use face_loop::{next_step, walk_face, FaceLoop, FaceStep, LoopEnd, VertexPair};
pub use mismatch::{FaceMismatch, MismatchKind};
