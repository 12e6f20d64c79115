use thiserror::Error;

/// Top-level error type for mesh walking and position transfer.
#[derive(Debug, Error)]
pub enum WalkerError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors related to mesh construction and entity lookup.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("mesh has no faces")]
    EmptyMesh,

    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex { face: usize, vertex: usize },

    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: usize, count: usize },

    #[error("face {face} is degenerate (vertex {vertex} repeats)")]
    DegenerateFace { face: usize, vertex: usize },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Which of the two meshes a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The mesh positions are copied from.
    Source,
    /// The mesh whose positions change.
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors raised while capturing or validating the seed selection.
///
/// These abort an operation before any mesh is modified.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("please select exactly one {element}, {count} selected")]
    Cardinality { element: &'static str, count: usize },

    #[error("{side} {field} has not been captured")]
    Missing { side: Side, field: &'static str },

    #[error("{side} mesh handle does not resolve to a mesh")]
    UnknownMesh { side: Side },

    #[error("{side} vertex {vertex} is not on face {face}")]
    VertexNotOnFace { side: Side, vertex: usize, face: usize },

    #[error("{side} vertices {first} and {second} do not share an edge of face {face}")]
    NotAdjacent {
        side: Side,
        first: usize,
        second: usize,
        face: usize,
    },
}

/// Errors related to coordinate space conversion.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("world transform of the target mesh is not invertible")]
    NonInvertible,
}

/// Convenience type alias for results using [`WalkerError`].
pub type Result<T> = std::result::Result<T, WalkerError>;
