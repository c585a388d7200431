//! Termination conditions for the search.
//!
//! A termination looks at the [`SolverScope`] and answers with the reason
//! to stop, if any. Conditions compose through [`OrTermination`] tuples;
//! `Option<T>` stands for a condition that may be disabled.

mod composite;
mod decision_count;
mod external;
mod improvement_count;
mod policy;
mod time;

use std::fmt::{self, Debug};

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use decision_count::DecisionCountTermination;
pub use external::ExternalTermination;
pub use improvement_count::ImprovementCountTermination;
pub use policy::TerminationPolicy;
pub use time::TimeTermination;

/// Why a search stopped before exhausting the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The size-banded improvement cap was reached.
    ImprovementCap,
    /// The decision budget ran out.
    DecisionLimit,
    /// An external caller requested termination.
    External,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TimeLimit => write!(f, "time limit"),
            StopReason::ImprovementCap => write!(f, "improvement cap"),
            StopReason::DecisionLimit => write!(f, "decision limit"),
            StopReason::External => write!(f, "external request"),
        }
    }
}

/// Trait for determining when to stop solving.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop, or `None` to keep searching.
    fn check(&self, solver_scope: &SolverScope) -> Option<StopReason>;

    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.check(solver_scope).is_some()
    }
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn check(&self, _: &SolverScope) -> Option<StopReason> {
        None
    }
}

impl<T: Termination> Termination for Option<T> {
    fn check(&self, solver_scope: &SolverScope) -> Option<StopReason> {
        self.as_ref().and_then(|t| t.check(solver_scope))
    }
}

#[cfg(test)]
mod tests;
