//! Decision count termination.

use super::{StopReason, Termination};
use crate::scope::SolverScope;

/// Terminates after a number of search decisions.
///
/// # Example
///
/// ```
/// use chromaforge_solver::termination::DecisionCountTermination;
///
/// // Terminate after 1000 decisions
/// let term = DecisionCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionCountTermination {
    limit: u64,
}

impl DecisionCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for DecisionCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<StopReason> {
        (solver_scope.decision_count() >= self.limit).then_some(StopReason::DecisionLimit)
    }
}
