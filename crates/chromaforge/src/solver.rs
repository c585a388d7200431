//! One-call entry points used by the binary and by library users.

use chromaforge_config::{ConfigError, SolverConfig};
use chromaforge_core::{ChromaForgeError, ColoringResult, Graph, Result};
use chromaforge_solver::ColoringSolver;
use thiserror::Error;

use crate::io;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Solve(#[from] ChromaForgeError),

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Solves `graph` under `config`.
///
/// # Errors
///
/// Returns [`ChromaForgeError::Infeasible`] when the graph has a self-loop.
pub fn solve(graph: &Graph, config: &SolverConfig) -> Result<ColoringResult> {
    ColoringSolver::new()
        .with_config(config.clone())
        .solve(graph)
}

/// Parses an instance, solves it and renders the two-line answer.
///
/// ```
/// use chromaforge::SolverConfig;
///
/// let out = chromaforge::solve_text("3 3\n0 1\n1 2\n2 0\n", &SolverConfig::default()).unwrap();
/// assert_eq!(out, "3 1\n0 1 2\n");
/// ```
pub fn solve_text(text: &str, config: &SolverConfig) -> Result<String> {
    let graph = io::parse_instance(text)?;
    let result = solve(&graph, config)?;
    Ok(io::format_solution(&result))
}
