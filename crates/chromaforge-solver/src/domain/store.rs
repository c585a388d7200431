//! Variable store: domains, partial assignment and incremental counters.

use chromaforge_core::{Color, Graph, VertexId};

use super::ColorDomain;

/// Mutable search state shared by the constraint engine and the driver.
///
/// Besides one [`ColorDomain`] per vertex, the store keeps counters that
/// would otherwise cost a full scan per search node:
/// - how many vertices currently hold each color (and thus how many colors
///   are in use)
/// - each vertex's residual degree, its number of unassigned neighbors
/// - the number of unassigned vertices
///
/// Every mutation has an exact inverse ([`assign`](Self::assign) /
/// [`unassign`](Self::unassign), [`remove_value`](Self::remove_value) /
/// [`restore`](Self::restore)) so backtracking returns the store to the
/// state it had before a decision.
#[derive(Debug, Clone)]
pub struct VariableStore {
    domains: Vec<ColorDomain>,
    assignment: Vec<Option<Color>>,
    // vertices holding each color
    color_usage: Vec<usize>,
    used_colors: usize,
    residual_degree: Vec<usize>,
    unassigned: usize,
}

impl VariableStore {
    /// Creates a store with nothing assigned.
    ///
    /// `domains` must hold exactly one domain per vertex of `graph`.
    pub fn new(graph: &Graph, domains: Vec<ColorDomain>) -> Self {
        let n = graph.vertex_count();
        debug_assert_eq!(domains.len(), n);
        Self {
            domains,
            assignment: vec![None; n],
            color_usage: vec![0; n],
            used_colors: 0,
            residual_degree: graph.vertices().map(|v| graph.degree(v)).collect(),
            unassigned: n,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.assignment.len()
    }

    pub fn domain(&self, vertex: VertexId) -> &ColorDomain {
        &self.domains[vertex]
    }

    pub fn value(&self, vertex: VertexId) -> Option<Color> {
        self.assignment[vertex]
    }

    pub fn is_assigned(&self, vertex: VertexId) -> bool {
        self.assignment[vertex].is_some()
    }

    pub fn assignment(&self) -> &[Option<Color>] {
        &self.assignment
    }

    pub fn unassigned_count(&self) -> usize {
        self.unassigned
    }

    pub fn is_complete(&self) -> bool {
        self.unassigned == 0
    }

    /// Number of distinct colors used by the partial assignment.
    pub fn used_color_count(&self) -> usize {
        self.used_colors
    }

    /// Returns true if at least one assigned vertex holds `color`.
    pub fn color_in_use(&self, color: Color) -> bool {
        self.color_usage.get(color).is_some_and(|&count| count > 0)
    }

    /// Number of unassigned neighbors of `vertex`.
    pub fn residual_degree(&self, vertex: VertexId) -> usize {
        self.residual_degree[vertex]
    }

    /// Unassigned vertices in id order.
    pub fn unassigned_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(v, _)| v)
    }

    /// Assigns `color` to the unassigned `vertex`.
    pub fn assign(&mut self, graph: &Graph, vertex: VertexId, color: Color) {
        debug_assert!(self.assignment[vertex].is_none());
        self.assignment[vertex] = Some(color);
        self.color_usage[color] += 1;
        if self.color_usage[color] == 1 {
            self.used_colors += 1;
        }
        self.unassigned -= 1;
        for &u in graph.neighbors(vertex) {
            self.residual_degree[u] -= 1;
        }
    }

    /// Clears the assignment of `vertex`, returning the color it held.
    pub fn unassign(&mut self, graph: &Graph, vertex: VertexId) -> Option<Color> {
        let color = self.assignment[vertex].take()?;
        self.color_usage[color] -= 1;
        if self.color_usage[color] == 0 {
            self.used_colors -= 1;
        }
        self.unassigned += 1;
        for &u in graph.neighbors(vertex) {
            self.residual_degree[u] += 1;
        }
        Some(color)
    }

    /// Removes `color` from the domain of `vertex`. Returns false if absent.
    pub fn remove_value(&mut self, vertex: VertexId, color: Color) -> bool {
        self.domains[vertex].remove(color)
    }

    /// Puts `color` back into the domain of every vertex in `pruned`.
    pub fn restore(&mut self, pruned: &[VertexId], color: Color) {
        for &u in pruned {
            self.domains[u].insert(color);
        }
    }

    /// The assignment as a plain color vector, if every vertex is assigned.
    pub fn complete_assignment(&self) -> Option<Vec<Color>> {
        if !self.is_complete() {
            return None;
        }
        self.assignment.iter().copied().collect()
    }
}
