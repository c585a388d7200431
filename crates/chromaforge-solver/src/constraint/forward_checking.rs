//! Forward checking propagation.

use chromaforge_core::{Color, Graph, VertexId};

use super::{Conflict, Propagator, Pruned};
use crate::domain::VariableStore;

/// Removes the assigned color from every unassigned neighbor.
///
/// Fails when a neighbor is left with no color below the ceiling. Because
/// every assigned color has been removed from the neighbors' domains, any
/// value still in a domain is compatible with the assigned neighbors, so
/// [`admits`](Propagator::admits) has nothing left to check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn admits(&self, _: &Graph, _: &VariableStore, _: VertexId, _: Color) -> bool {
        true
    }

    fn propagate(
        &self,
        graph: &Graph,
        store: &mut VariableStore,
        vertex: VertexId,
        color: Color,
        ceiling: Color,
    ) -> Result<Pruned, Conflict> {
        let mut pruned = Pruned::new();
        for &u in graph.neighbors(vertex) {
            if store.is_assigned(u) || !store.remove_value(u, color) {
                continue;
            }
            pruned.push(u);
            if color < ceiling && store.domain(u).count_below(ceiling) == 0 {
                return Err(Conflict { vertex: u, pruned });
            }
        }
        Ok(pruned)
    }

    fn name(&self) -> &'static str {
        "ForwardChecking"
    }
}
