//! Shared test fixtures for ChromaForge crates.
//!
//! This crate provides graph families with known chromatic numbers and
//! assertion helpers. It depends only on `chromaforge-core` so every other
//! crate can use it as a dev-dependency.
//!
//! - [`graphs`] - cycles, cliques, wheels, crowns, Petersen, Grötzsch...
//! - [`queens`] - queen graphs built from the N-Queens attack relation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! chromaforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use chromaforge_test::graphs::{cycle, petersen};
//! use chromaforge_test::assert_proper_coloring;
//!
//! let graph = cycle(4);
//! assert_proper_coloring(&graph, &[0, 1, 0, 1]);
//! assert_eq!(petersen().vertex_count(), 10);
//! ```

pub mod graphs;
pub mod queens;

use chromaforge_core::{conflicting_edges, Color, ColoringResult, Graph};

pub use graphs::{
    complete, complete_bipartite, crown, cycle, disjoint_union, grotzsch, mycielski, path,
    petersen, wheel,
};
pub use queens::queen_graph;

/// Panics unless `colors` is a proper coloring of `graph`.
pub fn assert_proper_coloring(graph: &Graph, colors: &[Color]) {
    assert_eq!(
        colors.len(),
        graph.vertex_count(),
        "expected one color per vertex"
    );
    let conflicts = conflicting_edges(graph, colors);
    assert!(
        conflicts.is_empty(),
        "monochromatic edges: {:?}",
        conflicts
    );
}

/// Panics unless `result` is proper, self-consistent and uses `expected` colors.
pub fn assert_coloring_result(graph: &Graph, result: &ColoringResult, expected: usize) {
    assert_proper_coloring(graph, &result.colors);
    assert_eq!(
        result.color_count,
        chromaforge_core::distinct_colors(&result.colors),
        "color_count disagrees with the colors used"
    );
    assert_eq!(result.color_count, expected, "unexpected color count");
}
