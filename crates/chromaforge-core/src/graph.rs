//! Immutable undirected graph model.

use crate::error::{ChromaForgeError, Result};

/// Vertex identifier in `[0, n)`.
pub type VertexId = usize;

/// Color index in `[0, n)`.
pub type Color = usize;

/// An undirected graph loaded once and never mutated.
///
/// Duplicate edges (in either orientation) collapse into a single adjacency
/// entry. Self-loops are not inserted into the adjacency lists; they are
/// recorded separately because they make the instance uncolorable.
///
/// # Example
///
/// ```
/// use chromaforge_core::Graph;
///
/// let graph = Graph::load(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 0)]).unwrap();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 4);
/// assert_eq!(graph.neighbors(0), &[1, 3]);
/// assert!(graph.are_adjacent(2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// distinct non-loop edges, stored with `u < v`, sorted
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: sorted neighbors of i
    adj_list: Vec<Vec<VertexId>>,
    /// vertices carrying an edge `(v, v)`, sorted
    self_loops: Vec<VertexId>,
}

impl Graph {
    /// Builds a graph from a vertex count and an edge list.
    ///
    /// # Errors
    ///
    /// Returns [`ChromaForgeError::InvalidInput`] if an endpoint lies outside `[0, n)`.
    pub fn load(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut adj_list: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        let mut self_loops = Vec::new();

        for (index, &(u, v)) in edges.iter().enumerate() {
            if u >= n || v >= n {
                return Err(ChromaForgeError::InvalidInput(format!(
                    "edge #{} ({}, {}) references a vertex outside [0, {})",
                    index, u, v, n
                )));
            }
            if u == v {
                self_loops.push(u);
                continue;
            }
            adj_list[u].push(v);
            adj_list[v].push(u);
        }

        for neighbors in &mut adj_list {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        self_loops.sort_unstable();
        self_loops.dedup();

        let edges = Self::build_edges(&adj_list);
        Ok(Self {
            n,
            edges,
            adj_list,
            self_loops,
        })
    }

    /// Creates a graph without edges.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            adj_list: vec![Vec::new(); n],
            self_loops: Vec::new(),
        }
    }

    fn build_edges(adj_list: &[Vec<VertexId>]) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for &j in l {
                if i < j {
                    res.push((i, j));
                }
            }
        }
        res
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of distinct edges, self-loops excluded.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct edges as `(u, v)` pairs with `u < v`.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Sorted, deduplicated neighbors of `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adj_list[v]
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj_list[v].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adj_list.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Edge density in `[0, 1]`.
    pub fn density(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let possible = (self.n * (self.n - 1) / 2) as f64;
        self.edge_count() as f64 / possible
    }

    /// O(log Δ) adjacency test.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        if u == v {
            return self.self_loops.binary_search(&u).is_ok();
        }
        self.adj_list[u].binary_search(&v).is_ok()
    }

    /// Vertices carrying a self-loop.
    pub fn self_loops(&self) -> &[VertexId] {
        &self.self_loops
    }

    pub fn has_self_loop(&self) -> bool {
        !self.self_loops.is_empty()
    }

    /// Iterator over all vertex ids.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.n
    }
}
