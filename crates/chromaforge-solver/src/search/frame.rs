//! Decision frames of the explicit search stack.

use smallvec::SmallVec;

use chromaforge_core::{Color, VertexId};

use crate::constraint::Pruned;

/// Candidate colors of one frame, ascending.
pub type Candidates = SmallVec<[Color; 8]>;

/// A decision that survived propagation, kept so it can be undone.
#[derive(Debug, Clone)]
pub struct AppliedDecision {
    pub color: Color,
    pub pruned: Pruned,
}

/// One level of the search tree: a vertex and the colors left to try on it.
///
/// The frame remembers the decision currently applied so that backtracking
/// can restore the pruned domains before the next candidate is tried.
#[derive(Debug, Clone)]
pub struct DecisionFrame {
    vertex: VertexId,
    candidates: Candidates,
    next: usize,
    applied: Option<AppliedDecision>,
}

impl DecisionFrame {
    pub fn new(vertex: VertexId, candidates: Candidates) -> Self {
        Self {
            vertex,
            candidates,
            next: 0,
            applied: None,
        }
    }

    #[inline]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Next untried candidate.
    #[inline]
    pub fn next_candidate(&mut self) -> Option<Color> {
        let color = self.candidates.get(self.next).copied()?;
        self.next += 1;
        Some(color)
    }

    /// Number of candidates not tried yet.
    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.next
    }

    pub fn apply(&mut self, color: Color, pruned: Pruned) {
        debug_assert!(self.applied.is_none());
        self.applied = Some(AppliedDecision { color, pruned });
    }

    pub fn applied_color(&self) -> Option<Color> {
        self.applied.as_ref().map(|d| d.color)
    }

    /// Removes the applied decision so the caller can undo it.
    pub fn take_applied(&mut self) -> Option<AppliedDecision> {
        self.applied.take()
    }
}
