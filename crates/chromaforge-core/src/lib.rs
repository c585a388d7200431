//! ChromaForge Core - graph model and result types for graph coloring
//!
//! This crate provides the fundamental types shared by every ChromaForge crate:
//! - [`Graph`]: immutable undirected graph with sorted adjacency
//! - [`ColoringResult`]: color count, optimality flag and per-vertex colors
//! - [`ChromaForgeError`]: error taxonomy (invalid input, infeasible instance)

pub mod coloring;
pub mod error;
pub mod graph;

#[cfg(test)]
mod graph_tests;

pub use coloring::{conflicting_edges, distinct_colors, is_proper, ColoringResult};
pub use error::{ChromaForgeError, Result};
pub use graph::{Color, Graph, VertexId};
