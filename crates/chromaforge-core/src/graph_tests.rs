//! Tests for the graph model and coloring helpers.

use crate::{conflicting_edges, distinct_colors, is_proper, ChromaForgeError, ColoringResult, Graph};

#[test]
fn test_load_square() {
    let graph = Graph::load(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbors(0), &[1, 3]);
    assert_eq!(graph.degree(2), 2);
    assert!(!graph.has_self_loop());
}

#[test]
fn test_duplicate_edges_collapse() {
    let graph = Graph::load(3, &[(0, 1), (1, 0), (0, 1), (1, 2)]).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn test_out_of_range_vertex() {
    let err = Graph::load(3, &[(0, 1), (1, 3)]).unwrap_err();

    assert!(matches!(err, ChromaForgeError::InvalidInput(_)));
    assert!(err.to_string().contains("(1, 3)"));
}

#[test]
fn test_self_loop_recorded() {
    let graph = Graph::load(3, &[(0, 1), (2, 2)]).unwrap();

    assert!(graph.has_self_loop());
    assert_eq!(graph.self_loops(), &[2]);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.are_adjacent(2, 2));
    assert!(!graph.are_adjacent(1, 1));
}

#[test]
fn test_are_adjacent() {
    let graph = Graph::load(5, &[(0, 4), (1, 3), (2, 4)]).unwrap();

    assert!(graph.are_adjacent(4, 0));
    assert!(graph.are_adjacent(3, 1));
    assert!(!graph.are_adjacent(0, 1));
}

#[test]
fn test_density_and_max_degree() {
    let graph = Graph::load(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();

    assert_eq!(graph.max_degree(), 3);
    assert!((graph.density() - 0.5).abs() < 1e-9);
    assert_eq!(Graph::empty(1).density(), 0.0);
}

#[test]
fn test_distinct_colors() {
    assert_eq!(distinct_colors(&[]), 0);
    assert_eq!(distinct_colors(&[0, 0, 0]), 1);
    assert_eq!(distinct_colors(&[3, 0, 3, 7]), 3);
}

#[test]
fn test_is_proper() {
    let graph = Graph::load(3, &[(0, 1), (1, 2)]).unwrap();

    assert!(is_proper(&graph, &[0, 1, 0]));
    assert!(!is_proper(&graph, &[0, 0, 1]));
    assert!(!is_proper(&graph, &[0, 1]));
    assert_eq!(conflicting_edges(&graph, &[1, 1, 1]), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_result_display() {
    let result = ColoringResult::new(3, false, vec![0, 1, 2, 0]);
    assert_eq!(result.to_string(), "3 0\n0 1 2 0");

    let trivial = ColoringResult::trivial(3);
    assert_eq!(trivial.color_count, 3);
    assert_eq!(trivial.colors, vec![0, 1, 2]);
    assert!(!trivial.is_optimal);
}
