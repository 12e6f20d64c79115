use std::fmt;

use super::face_loop::LoopEnd;

/// How two lockstep face walks disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The source face closed while the target face still had edges.
    SourceClosedFirst,
    /// The target face closed while the source face still had edges.
    TargetClosedFirst,
    /// One side could not find a next edge.
    DeadEnd,
}

impl MismatchKind {
    /// Classifies a divergence from how each walk ended (`None` if still running).
    pub(crate) fn from_ends(source: Option<LoopEnd>, target: Option<LoopEnd>) -> Self {
        match (source, target) {
            (Some(LoopEnd::Closed), None) => Self::SourceClosedFirst,
            (None, Some(LoopEnd::Closed)) => Self::TargetClosedFirst,
            _ => Self::DeadEnd,
        }
    }
}

/// A face pair whose boundary walks did not line up.
///
/// The pairs matched before the divergence are still used; nothing past it
/// is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMismatch {
    /// Index of the source face.
    pub source_face: usize,
    /// Index of the target face.
    pub target_face: usize,
    pub kind: MismatchKind,
    /// Number of steps that matched before the divergence.
    pub matched_steps: usize,
}

impl fmt::Display for FaceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            MismatchKind::SourceClosedFirst => "source face closed first",
            MismatchKind::TargetClosedFirst => "target face closed first",
            MismatchKind::DeadEnd => "walk dead-ended",
        };
        write!(
            f,
            "face mismatch between source face {} and target face {} after {} steps: {reason}",
            self.source_face, self.target_face, self.matched_steps
        )
    }
}
