//! ChromaForge Solver Engine
//!
//! This crate provides the branch-and-bound coloring engine:
//! - Color domains and the variable store ([`domain`])
//! - Constraint propagation and symmetry breaking ([`constraint`])
//! - The search driver and its lower bounds ([`search`])
//! - Incumbent tracking ([`BoundManager`]) and the clique bound ([`lower_bound`])
//! - Termination conditions and the size-banded policy ([`termination`])
//! - Event system for monitoring ([`event`])
//! - The top-level [`ColoringSolver`]

pub mod bound;
pub mod constraint;
pub mod domain;
pub mod event;
pub mod extract;
pub mod lower_bound;
pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;
pub mod termination;

pub use bound::BoundManager;
pub use constraint::{
    AssignmentCheck, Conflict, ConstraintEngine, ForwardChecking, Propagator, Pruned,
    SymmetryBreaking,
};
pub use domain::{ColorDomain, VariableStore};
pub use event::{
    ChannelEventListener, CountingEventListener, DecisionListener, ImprovedSolution,
    LoggingEventListener, SolverEventListener, SolverEventSupport,
};
pub use extract::extract_result;
pub use scope::SolverScope;
pub use search::{
    Bounder, SaturationBounder, SearchDriver, SearchOutcome, SearchStatus, UsedColorBounder,
};
pub use solver::{ColoringSolver, SolveReport};
pub use stats::SolverStats;
pub use termination::{
    DecisionCountTermination, ExternalTermination, ImprovementCountTermination, NoTermination,
    OrTermination, StopReason, Termination, TerminationPolicy, TimeTermination,
};
