//! Check-on-assignment propagation.

use chromaforge_core::{Color, Graph, VertexId};

use super::{Conflict, Propagator, Pruned};
use crate::domain::VariableStore;

/// Rejects a color held by an assigned neighbor; never touches domains.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentCheck;

impl Propagator for AssignmentCheck {
    fn admits(&self, graph: &Graph, store: &VariableStore, vertex: VertexId, color: Color) -> bool {
        graph
            .neighbors(vertex)
            .iter()
            .all(|&u| store.value(u) != Some(color))
    }

    fn propagate(
        &self,
        _: &Graph,
        _: &mut VariableStore,
        _: VertexId,
        _: Color,
        _: Color,
    ) -> Result<Pruned, Conflict> {
        Ok(Pruned::new())
    }

    fn name(&self) -> &'static str {
        "AssignmentCheck"
    }
}
