//! Vertex-ordering symmetry breaking.

use chromaforge_core::{Color, VertexId};

use crate::domain::ColorDomain;

/// Restricts vertex `v` to colors `0..=v+1`.
///
/// Any coloring can be relabeled so that colors appear in order of the
/// lowest vertex using them; in such a coloring vertex `v` never needs a
/// color above `v`. The bound `v + 1` keeps one color of slack and still
/// removes most permuted copies of the same coloring.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryBreaking {
    enabled: bool,
}

impl SymmetryBreaking {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Largest color `vertex` may take, if restricted.
    pub fn max_color(&self, vertex: VertexId) -> Option<Color> {
        self.enabled.then_some(vertex + 1)
    }

    /// Root domain of `vertex` in a graph with `n` vertices.
    pub fn initial_domain(&self, vertex: VertexId, n: usize) -> ColorDomain {
        let size = match self.max_color(vertex) {
            Some(max) => (max + 1).min(n),
            None => n,
        };
        ColorDomain::full(size)
    }

    pub fn admits(&self, vertex: VertexId, color: Color) -> bool {
        self.max_color(vertex).map_or(true, |max| color <= max)
    }
}

impl Default for SymmetryBreaking {
    fn default() -> Self {
        Self::new(true)
    }
}
