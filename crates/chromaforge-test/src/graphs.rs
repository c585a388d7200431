//! Graph families with known chromatic numbers.

use chromaforge_core::{Graph, VertexId};

fn build(n: usize, edges: &[(VertexId, VertexId)]) -> Graph {
    Graph::load(n, edges).expect("fixture edges are in range")
}

/// Path `0 - 1 - ... - n-1`. χ = 2 for n ≥ 2.
pub fn path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    build(n, &edges)
}

/// Cycle on `n ≥ 3` vertices. χ = 2 if n is even, 3 if odd.
pub fn cycle(n: usize) -> Graph {
    let mut edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    edges.push((n - 1, 0));
    build(n, &edges)
}

/// Complete graph K_n. χ = n.
pub fn complete(n: usize) -> Graph {
    let edges: Vec<_> = (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .collect();
    build(n, &edges)
}

/// Complete bipartite graph K_{a,b}; the left side is `0..a`. χ = 2.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let edges: Vec<_> = (0..a)
        .flat_map(|u| (a..a + b).map(move |v| (u, v)))
        .collect();
    build(a + b, &edges)
}

/// Crown graph: K_{n,n} minus a perfect matching. χ = 2.
///
/// Greedy in the natural order needs `n` colors on it, which makes it a
/// good check that the search does more than first-fit.
pub fn crown(n: usize) -> Graph {
    let edges: Vec<_> = (0..n)
        .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, n + j)))
        .collect();
    build(2 * n, &edges)
}

/// Wheel: hub `0` joined to a rim cycle `1..=rim`. χ = 3 for an even rim, 4 for an odd one.
pub fn wheel(rim: usize) -> Graph {
    let mut edges: Vec<_> = (1..=rim).map(|v| (0, v)).collect();
    edges.extend((1..rim).map(|v| (v, v + 1)));
    edges.push((rim, 1));
    build(rim + 1, &edges)
}

/// Petersen graph. χ = 3.
pub fn petersen() -> Graph {
    let mut edges = Vec::with_capacity(15);
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
    }
    build(10, &edges)
}

/// Mycielskian of `graph`: triangle-free stays triangle-free, χ grows by one.
///
/// Vertices `0..n` copy `graph`, vertex `n + i` is the shadow of `i`
/// (adjacent to the neighbors of `i`), and `2n` is joined to every shadow.
pub fn mycielski(graph: &Graph) -> Graph {
    let n = graph.vertex_count();
    let mut edges: Vec<_> = graph.edges().to_vec();
    for &(u, v) in graph.edges() {
        edges.push((n + u, v));
        edges.push((u, n + v));
    }
    edges.extend((0..n).map(|i| (n + i, 2 * n)));
    build(2 * n + 1, &edges)
}

/// Grötzsch graph, the Mycielskian of C5. Triangle-free with χ = 4.
pub fn grotzsch() -> Graph {
    mycielski(&cycle(5))
}

/// Places `b` after `a`; vertex `v` of `b` becomes `a.vertex_count() + v`.
pub fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
    let offset = a.vertex_count();
    let mut edges: Vec<_> = a.edges().to_vec();
    edges.extend(b.edges().iter().map(|&(u, v)| (u + offset, v + offset)));
    build(offset + b.vertex_count(), &edges)
}
