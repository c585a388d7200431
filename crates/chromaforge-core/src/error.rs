//! Error types for ChromaForge

use thiserror::Error;

use crate::graph::VertexId;

/// Main error type for ChromaForge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromaForgeError {
    /// Malformed instance: bad vertex indices, mismatched counts, unparsable tokens.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The graph admits no proper coloring (it contains a self-loop).
    #[error("Infeasible instance: vertex {vertex} is adjacent to itself")]
    Infeasible {
        /// First vertex found carrying a self-loop.
        vertex: VertexId,
    },
}

impl ChromaForgeError {
    /// Returns true if this error is a definitive "no coloring exists" answer.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ChromaForgeError::Infeasible { .. })
    }
}

/// Result type alias for ChromaForge operations
pub type Result<T> = std::result::Result<T, ChromaForgeError>;
