//! Constraint engine: the inequality constraint on every edge plus the
//! vertex-ordering symmetry break.
//!
//! A [`Propagator`] decides how much work happens after each assignment.
//! [`ForwardChecking`] removes the color from unassigned neighbors and fails
//! as soon as a neighbor has no live color left; [`AssignmentCheck`] only
//! compares against neighbors that are already assigned. Both are complete
//! and sound, they differ only in how early dead ends are detected.

mod assignment_check;
mod forward_checking;
mod symmetry;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use smallvec::SmallVec;

use chromaforge_core::{Color, Graph, VertexId};

use crate::domain::{ColorDomain, VariableStore};

pub use assignment_check::AssignmentCheck;
pub use forward_checking::ForwardChecking;
pub use symmetry::SymmetryBreaking;

/// Vertices whose domain lost the assigned color during one propagation.
pub type Pruned = SmallVec<[VertexId; 8]>;

/// Propagation failure: `vertex` has no live color left.
///
/// `pruned` lists the removals already performed so the caller can undo
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub vertex: VertexId,
    pub pruned: Pruned,
}

/// Enforces `color(u) != color(v)` across every edge.
///
/// The vertex has already been assigned in `store` when `propagate` runs.
/// `ceiling` is the exclusive color limit of the current search node;
/// colors at or above it are dead even if still present in a domain.
pub trait Propagator: Send + Debug {
    /// Returns true if `color` is compatible with the assigned neighbors of `vertex`.
    fn admits(&self, graph: &Graph, store: &VariableStore, vertex: VertexId, color: Color)
        -> bool;

    /// Propagates the assignment `vertex := color`.
    fn propagate(
        &self,
        graph: &Graph,
        store: &mut VariableStore,
        vertex: VertexId,
        color: Color,
        ceiling: Color,
    ) -> Result<Pruned, Conflict>;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// The propagator combined with symmetry breaking.
///
/// # Example
///
/// ```
/// use chromaforge_core::Graph;
/// use chromaforge_solver::constraint::{ConstraintEngine, ForwardChecking, SymmetryBreaking};
///
/// let graph = Graph::load(3, &[(0, 1), (1, 2)]).unwrap();
/// let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::new(true));
/// let mut store = engine.initial_store(&graph);
///
/// assert_eq!(store.domain(0).len(), 2);
/// assert!(engine.admits(&graph, &store, 0, 0));
///
/// store.assign(&graph, 0, 0);
/// let pruned = engine.propagate(&graph, &mut store, 0, 0, 3).unwrap();
/// assert_eq!(pruned.as_slice(), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintEngine<P> {
    propagator: P,
    symmetry: SymmetryBreaking,
}

impl<P: Propagator> ConstraintEngine<P> {
    pub fn new(propagator: P, symmetry: SymmetryBreaking) -> Self {
        Self {
            propagator,
            symmetry,
        }
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    pub fn symmetry(&self) -> &SymmetryBreaking {
        &self.symmetry
    }

    /// Root domains for every vertex, already restricted by symmetry breaking.
    pub fn initial_domains(&self, graph: &Graph) -> Vec<ColorDomain> {
        let n = graph.vertex_count();
        graph
            .vertices()
            .map(|v| self.symmetry.initial_domain(v, n))
            .collect()
    }

    /// A fresh store over [`initial_domains`](Self::initial_domains).
    pub fn initial_store(&self, graph: &Graph) -> VariableStore {
        VariableStore::new(graph, self.initial_domains(graph))
    }

    /// Returns true if `vertex := color` violates no constraint.
    pub fn admits(
        &self,
        graph: &Graph,
        store: &VariableStore,
        vertex: VertexId,
        color: Color,
    ) -> bool {
        self.symmetry.admits(vertex, color) && self.propagator.admits(graph, store, vertex, color)
    }

    /// Propagates an assignment already recorded in `store`.
    pub fn propagate(
        &self,
        graph: &Graph,
        store: &mut VariableStore,
        vertex: VertexId,
        color: Color,
        ceiling: Color,
    ) -> Result<Pruned, Conflict> {
        self.propagator
            .propagate(graph, store, vertex, color, ceiling)
    }
}
