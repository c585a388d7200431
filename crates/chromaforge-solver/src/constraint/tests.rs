//! Tests for propagation and symmetry breaking.

use super::*;
use chromaforge_core::Graph;

fn star() -> Graph {
    // 0 is the center
    Graph::load(4, &[(0, 1), (0, 2), (0, 3)]).unwrap()
}

#[test]
fn test_symmetry_domains() {
    let graph = Graph::empty(5);
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::new(true));
    let domains = engine.initial_domains(&graph);

    let sizes: Vec<usize> = domains.iter().map(ColorDomain::len).collect();
    assert_eq!(sizes, vec![2, 3, 4, 5, 5]);
}

#[test]
fn test_symmetry_disabled_domains() {
    let graph = Graph::empty(3);
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::disabled());
    let domains = engine.initial_domains(&graph);

    assert!(domains.iter().all(|d| d.len() == 3));
    assert!(engine.admits(&graph, &engine.initial_store(&graph), 0, 2));
}

#[test]
fn test_symmetry_admits() {
    let symmetry = SymmetryBreaking::default();

    assert!(symmetry.admits(0, 1));
    assert!(!symmetry.admits(0, 2));
    assert!(symmetry.admits(3, 4));
    assert!(SymmetryBreaking::disabled().admits(0, 9));
}

#[test]
fn test_forward_checking_prunes_neighbors() {
    let graph = star();
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::disabled());
    let mut store = engine.initial_store(&graph);

    store.assign(&graph, 0, 2);
    let pruned = engine.propagate(&graph, &mut store, 0, 2, 4).unwrap();

    assert_eq!(pruned.as_slice(), &[1, 2, 3]);
    assert!(!store.domain(1).contains(2));
    assert!(store.domain(0).contains(2));
}

#[test]
fn test_forward_checking_skips_assigned_neighbors() {
    let graph = star();
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::disabled());
    let mut store = engine.initial_store(&graph);

    store.assign(&graph, 1, 0);
    store.assign(&graph, 0, 1);
    let pruned = engine.propagate(&graph, &mut store, 0, 1, 4).unwrap();

    assert_eq!(pruned.as_slice(), &[2, 3]);
    assert!(store.domain(1).contains(1));
}

#[test]
fn test_forward_checking_wipeout() {
    let graph = Graph::load(2, &[(0, 1)]).unwrap();
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::disabled());
    let mut store = engine.initial_store(&graph);

    // ceiling 1: only color 0 is live
    store.assign(&graph, 0, 0);
    let conflict = engine.propagate(&graph, &mut store, 0, 0, 1).unwrap_err();

    assert_eq!(conflict.vertex, 1);
    assert_eq!(conflict.pruned.as_slice(), &[1]);

    store.restore(&conflict.pruned, 0);
    assert!(store.domain(1).contains(0));
}

#[test]
fn test_forward_checking_admits_any_domain_value() {
    let graph = star();
    let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::disabled());
    let store = engine.initial_store(&graph);

    assert!(engine.admits(&graph, &store, 1, 3));
    assert_eq!(engine.propagator().name(), "ForwardChecking");
}

#[test]
fn test_assignment_check() {
    let graph = star();
    let engine = ConstraintEngine::new(AssignmentCheck, SymmetryBreaking::disabled());
    let mut store = engine.initial_store(&graph);

    store.assign(&graph, 0, 1);
    let pruned = engine.propagate(&graph, &mut store, 0, 1, 4).unwrap();
    assert!(pruned.is_empty());
    assert!(store.domain(2).contains(1));

    assert!(!engine.admits(&graph, &store, 2, 1));
    assert!(engine.admits(&graph, &store, 2, 0));
    assert_eq!(engine.propagator().name(), "AssignmentCheck");
}
