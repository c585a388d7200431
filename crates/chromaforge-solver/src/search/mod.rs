//! Branch-and-bound search driver.
//!
//! Depth-first search over an explicit stack of [`DecisionFrame`]s:
//!
//! 1. Pick the unassigned vertex with the smallest live domain.
//! 2. Try its live colors in ascending order; each assignment is propagated
//!    and a conflict moves on to the next color.
//! 3. On a complete assignment, offer it to the [`BoundManager`]. An
//!    improvement lowers the color ceiling for the rest of the search.
//! 4. Nodes whose lower bound reaches the incumbent are pruned.
//!
//! Backtracking restores exactly the domain values the undone decision
//! removed. Exhausting the tree proves the incumbent optimal.

mod bounder;
mod frame;
mod selector;


use std::fmt;
use std::time::Instant;

use tracing::{debug, info, trace};

use chromaforge_config::DEFAULT_CHECK_INTERVAL;
use chromaforge_core::{Color, Graph, VertexId};

use crate::bound::BoundManager;
use crate::constraint::{ConstraintEngine, Propagator};
use crate::domain::VariableStore;
use crate::event::SolverEventSupport;
use crate::scope::SolverScope;
use crate::stats::SolverStats;
use crate::termination::{StopReason, Termination};

pub use bounder::{Bounder, SaturationBounder, UsedColorBounder};
pub use frame::{AppliedDecision, Candidates, DecisionFrame};
pub use selector::{candidate_values, select_vertex};

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The whole tree was explored; the incumbent is optimal.
    Exhausted,
    /// The incumbent met the clique lower bound; it is optimal.
    LowerBoundReached,
    /// A termination condition fired first.
    Stopped(StopReason),
}

impl SearchStatus {
    /// Returns true if the search proved the incumbent optimal.
    pub fn is_proven_optimal(&self) -> bool {
        matches!(self, SearchStatus::Exhausted | SearchStatus::LowerBoundReached)
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            SearchStatus::Stopped(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Exhausted => write!(f, "exhausted"),
            SearchStatus::LowerBoundReached => write!(f, "lower bound reached"),
            SearchStatus::Stopped(reason) => write!(f, "stopped: {}", reason),
        }
    }
}

/// Everything the driver hands back once it stops.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub bound: BoundManager,
    pub stats: SolverStats,
}

/// Runs branch-and-bound over one graph.
///
/// Generic over the propagator, bounder and termination so the hot loop is
/// monomorphized for each combination.
///
/// # Example
///
/// ```
/// use chromaforge_core::Graph;
/// use chromaforge_solver::constraint::{ConstraintEngine, ForwardChecking, SymmetryBreaking};
/// use chromaforge_solver::event::SolverEventSupport;
/// use chromaforge_solver::search::{SearchDriver, SearchStatus, UsedColorBounder};
/// use chromaforge_solver::termination::NoTermination;
///
/// let graph = Graph::load(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
/// let engine = ConstraintEngine::new(ForwardChecking, SymmetryBreaking::new(true));
/// let events = SolverEventSupport::new();
///
/// let outcome = SearchDriver::new(&graph, &engine, UsedColorBounder, NoTermination, &events).run();
///
/// assert_eq!(outcome.status, SearchStatus::Exhausted);
/// assert_eq!(outcome.bound.best_count(), 3);
/// ```
pub struct SearchDriver<'a, P, B, T> {
    graph: &'a Graph,
    engine: &'a ConstraintEngine<P>,
    bounder: B,
    termination: T,
    events: &'a SolverEventSupport,
    check_interval: u64,
    store: VariableStore,
    stack: Vec<DecisionFrame>,
    bound: BoundManager,
    scope: SolverScope,
    stats: SolverStats,
    pending_stop: Option<StopReason>,
    last_progress: Instant,
}

impl<'a, P, B, T> SearchDriver<'a, P, B, T>
where
    P: Propagator,
    B: Bounder,
    T: Termination,
{
    pub fn new(
        graph: &'a Graph,
        engine: &'a ConstraintEngine<P>,
        bounder: B,
        termination: T,
        events: &'a SolverEventSupport,
    ) -> Self {
        Self {
            graph,
            engine,
            bounder,
            termination,
            events,
            check_interval: DEFAULT_CHECK_INTERVAL,
            store: engine.initial_store(graph),
            stack: Vec::with_capacity(graph.vertex_count()),
            bound: BoundManager::new(graph.vertex_count()),
            scope: SolverScope::new(),
            stats: SolverStats::default(),
            pending_stop: None,
            last_progress: Instant::now(),
        }
    }

    /// Sets how many decisions pass between periodic termination checks.
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Seeds a proven lower bound on the chromatic number.
    pub fn with_lower_bound(mut self, lower_bound: usize) -> Self {
        self.bound.set_lower_bound(lower_bound);
        self
    }

    /// Searches until the tree is exhausted, the lower bound is met, or a
    /// termination condition fires.
    pub fn run(mut self) -> SearchOutcome {
        self.scope.start_solving();
        self.stats.start();
        self.last_progress = Instant::now();

        let status = self.search();

        self.stats.finish();
        debug!(
            event = "search_end",
            status = %status,
            decisions = self.stats.decisions,
            backtracks = self.stats.backtracks,
            conflicts = self.stats.conflicts,
            bound_prunes = self.stats.bound_prunes,
            best = self.bound.best_count(),
        );
        SearchOutcome {
            status,
            bound: self.bound,
            stats: self.stats,
        }
    }

    fn search(&mut self) -> SearchStatus {
        if self.bound.is_proven_optimal() {
            return SearchStatus::LowerBoundReached;
        }
        if let Some(reason) = self.termination.check(&self.scope) {
            return SearchStatus::Stopped(reason);
        }

        loop {
            if let Some(reason) = self.pending_stop.take() {
                return SearchStatus::Stopped(reason);
            }

            if self.store.is_complete() {
                if let Some(status) = self.on_complete() {
                    return status;
                }
                if !self.backtrack() {
                    return SearchStatus::Exhausted;
                }
                continue;
            }

            let ceiling = self.bound.color_ceiling();
            let lower_bound = self.bounder.lower_bound(self.graph, &self.store, ceiling);
            if self.bound.can_prune(lower_bound) {
                self.stats.record_bound_prune();
                if !self.backtrack() {
                    return SearchStatus::Exhausted;
                }
                continue;
            }

            let Some(vertex) = select_vertex(&self.store, ceiling) else {
                return SearchStatus::Exhausted;
            };
            let candidates = candidate_values(&self.store, vertex, ceiling);
            self.stack.push(DecisionFrame::new(vertex, candidates));
            if !self.advance() && !self.backtrack() {
                return SearchStatus::Exhausted;
            }
        }
    }

    /// Tries the remaining candidates of the top frame.
    ///
    /// Returns true once one survives propagation. Otherwise the frame is
    /// popped and false is returned.
    fn advance(&mut self) -> bool {
        let ceiling = self.bound.color_ceiling();
        let depth = self.stack.len();
        let Some(frame) = self.stack.last_mut() else {
            return false;
        };
        let vertex = frame.vertex();

        while let Some(color) = frame.next_candidate() {
            // candidates ascend, so nothing after this is live either
            if color >= ceiling {
                break;
            }
            if !self.engine.admits(self.graph, &self.store, vertex, color) {
                continue;
            }
            self.store.assign(self.graph, vertex, color);
            match self
                .engine
                .propagate(self.graph, &mut self.store, vertex, color, ceiling)
            {
                Ok(pruned) => {
                    frame.apply(color, pruned);
                    self.after_decision(vertex, color, depth);
                    return true;
                }
                Err(conflict) => {
                    self.store.restore(&conflict.pruned, color);
                    self.store.unassign(self.graph, vertex);
                    self.stats.record_conflict();
                }
            }
        }

        self.stack.pop();
        false
    }

    /// Undoes decisions until some frame has a candidate left to try.
    ///
    /// Returns false once the stack is empty.
    fn backtrack(&mut self) -> bool {
        loop {
            let depth = self.stack.len();
            let Some(frame) = self.stack.last_mut() else {
                return false;
            };
            if let Some(applied) = frame.take_applied() {
                let vertex = frame.vertex();
                self.store.restore(&applied.pruned, applied.color);
                self.store.unassign(self.graph, vertex);
                self.stats.record_backtrack();
                self.events.fire_decision_undone(vertex, depth);
            }
            if self.advance() {
                return true;
            }
        }
    }

    fn after_decision(&mut self, vertex: VertexId, color: Color, depth: usize) {
        self.stats.record_decision(depth);
        let decisions = self.scope.increment_decision_count();
        trace!(event = "decision", vertex, color, depth);
        self.events.fire_decision_made(vertex, color, depth);

        if decisions % self.check_interval == 0 {
            self.log_progress();
            self.pending_stop = self.termination.check(&self.scope);
        }
    }

    /// Handles a complete assignment. Returns a status if the search must stop.
    fn on_complete(&mut self) -> Option<SearchStatus> {
        let colors = self.store.complete_assignment()?;
        let improved = self.bound.record_solution(&colors);
        self.stats.record_solution(improved);

        if improved {
            let color_count = self.bound.best_count();
            let improvements = self.scope.record_improvement(color_count);
            info!(
                event = "solution_improved",
                colors = color_count,
                improvements,
                decisions = self.scope.decision_count(),
                elapsed_ms = self.stats.elapsed().as_millis() as u64,
            );
            self.events.fire_solution_improved(&colors, color_count);

            if self.bound.is_proven_optimal() {
                return Some(SearchStatus::LowerBoundReached);
            }
        }

        self.termination
            .check(&self.scope)
            .map(SearchStatus::Stopped)
    }

    fn log_progress(&mut self) {
        let now = Instant::now();
        let since = now.duration_since(self.last_progress);
        if since.as_secs() >= 1 {
            debug!(
                event = "progress",
                decisions = self.scope.decision_count(),
                depth = self.stack.len(),
                best = self.bound.best_count(),
                speed = self.stats.decisions_per_second() as u64,
            );
            self.last_progress = now;
        }
    }
}
