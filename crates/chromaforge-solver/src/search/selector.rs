//! Variable and value ordering.

use std::cmp::Reverse;

use chromaforge_core::{Color, VertexId};

use super::frame::Candidates;
use crate::domain::VariableStore;

/// Picks the next vertex to branch on.
///
/// Smallest live domain first (fail-first), ties broken by the largest
/// number of unassigned neighbors, then by the smallest id. Returns `None`
/// when every vertex is assigned.
pub fn select_vertex(store: &VariableStore, ceiling: Color) -> Option<VertexId> {
    store
        .unassigned_vertices()
        .min_by_key(|&v| (store.domain(v).count_below(ceiling), Reverse(store.residual_degree(v))))
}

/// Live colors of `vertex` in ascending order.
pub fn candidate_values(store: &VariableStore, vertex: VertexId, ceiling: Color) -> Candidates {
    store.domain(vertex).iter_below(ceiling).collect()
}
