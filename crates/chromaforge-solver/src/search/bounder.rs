//! Lower bounds for branch-and-bound pruning.
//!
//! A bounder estimates the fewest colors any completion of the current
//! partial assignment can use. When that estimate reaches the incumbent's
//! color count the node cannot lead to an improvement and is pruned.

use std::fmt::Debug;

use smallvec::SmallVec;

use chromaforge_core::{Color, Graph, VertexId};

use crate::domain::VariableStore;

/// Calculates a lower bound on the colors needed below a search node.
///
/// The bound must never exceed the color count of any proper completion.
pub trait Bounder: Send + Debug {
    fn lower_bound(&self, graph: &Graph, store: &VariableStore, ceiling: Color) -> usize;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// Counts the distinct colors already used.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsedColorBounder;

impl Bounder for UsedColorBounder {
    fn lower_bound(&self, _: &Graph, store: &VariableStore, _: Color) -> usize {
        store.used_color_count()
    }

    fn name(&self) -> &'static str {
        "UsedColors"
    }
}

/// Used colors plus the vertices that are forced onto fresh colors.
///
/// An unassigned vertex whose live domain holds no used color will need a
/// color not used yet. Pairwise adjacent vertices of that kind need pairwise
/// different fresh colors, so a greedy clique among them adds to the bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturationBounder;

impl Bounder for SaturationBounder {
    fn lower_bound(&self, graph: &Graph, store: &VariableStore, ceiling: Color) -> usize {
        let used = store.used_color_count();
        let mut forced: SmallVec<[VertexId; 8]> = SmallVec::new();
        for u in store.unassigned_vertices() {
            let fresh_only = store
                .domain(u)
                .iter_below(ceiling)
                .all(|c| !store.color_in_use(c));
            if fresh_only && forced.iter().all(|&w| graph.are_adjacent(u, w)) {
                forced.push(u);
            }
        }
        used + forced.len()
    }

    fn name(&self) -> &'static str {
        "Saturation"
    }
}
