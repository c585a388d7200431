//! Greedy clique lower bound.

use bit_set::BitSet;

use chromaforge_core::{Graph, VertexId};

/// Number of highest-degree vertices tried as clique seeds.
pub const DEFAULT_CLIQUE_STARTS: usize = 16;

/// Finds a large clique greedily.
///
/// From each of the `starts` highest-degree seeds, repeatedly adds the
/// candidate of largest degree and keeps only its neighbors as candidates.
/// Returns the largest clique found, sorted. Every vertex of a clique needs
/// its own color, so its size is a lower bound on the chromatic number.
///
/// # Example
///
/// ```
/// use chromaforge_core::Graph;
/// use chromaforge_solver::lower_bound::greedy_clique;
///
/// // triangle 0-1-2 plus a pendant vertex 3
/// let graph = Graph::load(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
/// assert_eq!(greedy_clique(&graph, 4), vec![0, 1, 2]);
/// ```
pub fn greedy_clique(graph: &Graph, starts: usize) -> Vec<VertexId> {
    let mut seeds: Vec<VertexId> = graph.vertices().collect();
    seeds.sort_by_key(|&v| (std::cmp::Reverse(graph.degree(v)), v));

    let mut best: Vec<VertexId> = Vec::new();
    for &seed in seeds.iter().take(starts.max(1)) {
        // no clique through a lower-degree seed can beat the current best
        if graph.degree(seed) < best.len() {
            break;
        }
        let clique = grow_clique(graph, seed);
        if clique.len() > best.len() {
            best = clique;
        }
    }
    best.sort_unstable();
    best
}

fn grow_clique(graph: &Graph, seed: VertexId) -> Vec<VertexId> {
    let mut clique = vec![seed];
    let mut candidates: BitSet = graph.neighbors(seed).iter().copied().collect();

    while let Some(next) = candidates
        .iter()
        .max_by_key(|&v| (graph.degree(v), std::cmp::Reverse(v)))
    {
        clique.push(next);
        let neighbors: BitSet = graph.neighbors(next).iter().copied().collect();
        candidates.intersect_with(&neighbors);
    }
    clique
}

/// Size of [`greedy_clique`], the lower bound used by the solver.
pub fn clique_lower_bound(graph: &Graph, starts: usize) -> usize {
    greedy_clique(graph, starts).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        assert!(greedy_clique(&Graph::empty(0), 4).is_empty());
        assert_eq!(clique_lower_bound(&Graph::empty(3), 4), 1);
    }

    #[test]
    fn test_complete_graph() {
        let edges: Vec<_> = (0..5)
            .flat_map(|u| (u + 1..5).map(move |v| (u, v)))
            .collect();
        let graph = Graph::load(5, &edges).unwrap();

        assert_eq!(greedy_clique(&graph, 1), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clique_is_pairwise_adjacent() {
        // two triangles sharing vertex 2, plus a K4 on 5..9
        let graph = Graph::load(
            9,
            &[
                (0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4),
                (5, 6), (5, 7), (5, 8), (6, 7), (6, 8), (7, 8),
            ],
        )
        .unwrap();

        let clique = greedy_clique(&graph, DEFAULT_CLIQUE_STARTS);
        assert_eq!(clique, vec![5, 6, 7, 8]);
        for (i, &u) in clique.iter().enumerate() {
            for &v in &clique[i + 1..] {
                assert!(graph.are_adjacent(u, v));
            }
        }
    }

    #[test]
    fn test_odd_cycle_bound() {
        let graph = Graph::load(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        assert_eq!(clique_lower_bound(&graph, DEFAULT_CLIQUE_STARTS), 2);
    }
}
