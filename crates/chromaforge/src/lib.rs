//! ChromaForge - minimum graph coloring in Rust
//!
//! Load a graph, call [`solve`], get a proper coloring with as few colors as
//! the time budget allows and a flag telling whether it is proven optimal.
//!
//! # Example
//!
//! ```rust
//! use chromaforge::prelude::*;
//!
//! let graph = Graph::load(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
//! let result = chromaforge::solve(&graph, &SolverConfig::default()).unwrap();
//!
//! assert_eq!(result.color_count, 3);
//! assert!(result.is_optimal);
//! ```

pub mod io;

mod solver;
pub use solver::{solve, solve_text, CliError};

// Model and results
pub use chromaforge_core::{
    conflicting_edges, distinct_colors, is_proper, ChromaForgeError, Color, ColoringResult, Graph,
    Result, VertexId,
};

// Configuration
pub use chromaforge_config::{
    BounderType, ConfigError, PropagationType, SearchConfig, SolverConfig, TerminationConfig,
};

// Engine
pub use chromaforge_solver::{
    ChannelEventListener, ColoringSolver, CountingEventListener, DecisionListener,
    ImprovedSolution, LoggingEventListener, SearchStatus, SolveReport, SolverEventListener,
    SolverStats, StopReason,
};

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub mod console {
    pub use chromaforge_console::{init, init_with_level, SolverConsoleLayer};
}

pub mod prelude {
    pub use super::{ColoringResult, ColoringSolver, Graph, SolverConfig};
    pub use super::{SearchConfig, TerminationConfig};
    pub use super::{SolverEventListener, StopReason};
}
