//! Queen graphs.
//!
//! One vertex per square of an `n x n` board, with an edge between two
//! squares whenever queens placed on them would attack each other. Each row
//! is a clique of size `n`, so χ ≥ n; a proper coloring with `n` colors is a
//! partition of the board into `n` non-attacking queen placements.

use chromaforge_core::{Graph, VertexId};

/// Square `(row, column)` of an `n x n` board.
pub fn square(n: usize, row: usize, column: usize) -> VertexId {
    row * n + column
}

fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

/// Queen graph on an `n x n` board. χ = 5 for n = 5.
pub fn queen_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for a in 0..n * n {
        for b in a + 1..n * n {
            if attacks(a / n, a % n, b / n, b % n) {
                edges.push((a, b));
            }
        }
    }
    Graph::load(n * n, &edges).expect("queen squares are in range")
}
