//! Improvement count termination.

use super::{StopReason, Termination};
use crate::scope::SolverScope;

/// Terminates once the best coloring has improved `limit` times.
///
/// Used for medium and large instances where proving optimality is out of
/// reach and the first few improvements capture most of the gain.
#[derive(Debug, Clone)]
pub struct ImprovementCountTermination {
    limit: u64,
}

impl ImprovementCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for ImprovementCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<StopReason> {
        (solver_scope.improvement_count() >= self.limit).then_some(StopReason::ImprovementCap)
    }
}
