//! End-to-end scenarios: text in, text out, through the public facade.

use std::sync::Arc;
use std::thread;

use chromaforge::io::{format_solution, parse_instance};
use chromaforge::prelude::*;
use chromaforge::{solve, solve_text, BounderType, ChannelEventListener, ChromaForgeError, PropagationType};
use chromaforge_test::{
    assert_coloring_result, assert_proper_coloring, complete, cycle, disjoint_union, grotzsch,
    mycielski, petersen, queen_graph,
};

fn default_config() -> SolverConfig {
    SolverConfig::new().with_termination_seconds(30)
}

#[test]
fn test_four_cycle() {
    let out = solve_text("4 4\n0 1\n1 2\n2 3\n3 0\n", &default_config()).unwrap();
    assert_eq!(out, "2 1\n0 1 0 1\n");
}

#[test]
fn test_complete_five_is_permutation() {
    let graph = complete(5);
    let result = solve(&graph, &default_config()).unwrap();

    assert_coloring_result(&graph, &result, 5);
    assert!(result.is_optimal);
    let mut colors = result.colors.clone();
    colors.sort_unstable();
    assert_eq!(colors, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_isolated_vertex_beside_cycle() {
    let text = "5 4\n0 1\n1 2\n2 3\n3 0\n";
    let graph = parse_instance(text).unwrap();
    let result = solve(&graph, &default_config()).unwrap();

    assert_coloring_result(&graph, &result, 2);
    assert!(result.is_optimal);
    assert_eq!(result.color_of(4), 0);
}

#[test]
fn test_edgeless_graph() {
    let out = solve_text("3 0\n", &default_config()).unwrap();
    assert_eq!(out, "1 1\n0 0 0\n");
}

#[test]
fn test_self_loop_is_infeasible() {
    let err = solve_text("3 2\n0 1\n2 2\n", &default_config()).unwrap_err();
    assert!(matches!(err, ChromaForgeError::Infeasible { vertex: 2 }));
}

#[test]
fn test_malformed_input() {
    let err = solve_text("3 2\n0 1\n", &default_config()).unwrap_err();
    assert!(matches!(err, ChromaForgeError::InvalidInput(_)));
}

#[test]
fn test_known_chromatic_numbers() {
    let cases = [
        (cycle(7), 3),
        (petersen(), 3),
        (grotzsch(), 4),
        (disjoint_union(&complete(4), &cycle(5)), 4),
    ];

    for (graph, expected) in cases {
        let result = solve(&graph, &default_config()).unwrap();
        assert_coloring_result(&graph, &result, expected);
        assert!(result.is_optimal);
    }
}

#[test]
fn test_strategies_agree() {
    let graph = grotzsch();
    let mut counts = Vec::new();

    for propagation in [PropagationType::ForwardChecking, PropagationType::AssignmentCheck] {
        for bounder in [BounderType::UsedColors, BounderType::Saturation] {
            let config = default_config().with_search(SearchConfig {
                propagation,
                bounder,
                clique_lower_bound: false,
                ..SearchConfig::default()
            });
            let result = solve(&graph, &config).unwrap();
            assert_proper_coloring(&graph, &result.colors);
            assert!(result.is_optimal);
            counts.push(result.color_count);
        }
    }

    assert!(counts.iter().all(|&c| c == 4), "counts: {:?}", counts);
}

#[test]
fn test_output_is_deterministic() {
    let graph = queen_graph(5);
    let first = format_solution(&solve(&graph, &default_config()).unwrap());
    let second = format_solution(&solve(&graph, &default_config()).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_larger_budget_never_worse() {
    let graph = queen_graph(7);
    let with_budget = |limit| {
        let config = default_config()
            .with_decision_limit(limit)
            .with_search(SearchConfig {
                check_interval: 1,
                ..SearchConfig::default()
            });
        solve(&graph, &config).unwrap()
    };

    let mut previous = usize::MAX;
    for limit in [1, 10, 100, 1_000] {
        let result = with_budget(limit);
        assert_proper_coloring(&graph, &result.colors);
        assert!(result.color_count <= previous);
        previous = result.color_count;
    }
}

#[test]
fn test_cancel_from_another_thread() {
    // Mycielski graphs have clique number 2, so the optimum is never proven quickly.
    let graph = mycielski(&mycielski(&grotzsch()));
    let (listener, mut receiver) = ChannelEventListener::channel();
    let solver = Arc::new(
        ColoringSolver::new()
            .with_config(default_config())
            .with_solver_listener(Arc::new(listener)),
    );

    let handle = {
        let solver = Arc::clone(&solver);
        let graph = graph.clone();
        thread::spawn(move || solver.solve(&graph))
    };

    let first = receiver.blocking_recv().expect("at least one improvement");
    assert_proper_coloring(&graph, &first.colors);
    let cancelled = solver.terminate_early();

    let result = handle.join().unwrap().unwrap();
    assert_proper_coloring(&graph, &result.colors);
    assert!(result.color_count <= first.color_count);
    if cancelled {
        assert!(!result.is_optimal);
    }
}
