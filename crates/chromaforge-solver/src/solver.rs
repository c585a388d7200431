//! Top-level coloring solver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use chromaforge_config::{BounderType, PropagationType, SolverConfig};
use chromaforge_core::{ChromaForgeError, ColoringResult, Graph, Result};

use crate::constraint::{
    AssignmentCheck, ConstraintEngine, ForwardChecking, Propagator, SymmetryBreaking,
};
use crate::event::{DecisionListener, SolverEventListener, SolverEventSupport};
use crate::extract::extract_result;
use crate::lower_bound::{clique_lower_bound, DEFAULT_CLIQUE_STARTS};
use crate::search::{
    Bounder, SaturationBounder, SearchDriver, SearchOutcome, SearchStatus, UsedColorBounder,
};
use crate::stats::SolverStats;
use crate::termination::TerminationPolicy;

/// A finished solve: the answer plus how the search ended.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub result: ColoringResult,
    pub status: SearchStatus,
    pub stats: SolverStats,
    /// Greatest proven lower bound on the chromatic number.
    pub lower_bound: usize,
}

/// Finds a minimum coloring of a graph within the configured budget.
///
/// Wires the constraint engine, bounder and termination policy selected by
/// the [`SolverConfig`] into a [`SearchDriver`] and extracts the result.
///
/// # Example
///
/// ```
/// use chromaforge_core::Graph;
/// use chromaforge_solver::ColoringSolver;
///
/// let graph = Graph::load(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let result = ColoringSolver::new().solve(&graph).unwrap();
///
/// assert_eq!(result.color_count, 2);
/// assert!(result.is_optimal);
/// assert_eq!(result.to_string(), "2 1\n0 1 0 1");
/// ```
#[derive(Debug, Default)]
pub struct ColoringSolver {
    config: SolverConfig,
    events: SolverEventSupport,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
}

impl ColoringSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the wall-clock budget.
    ///
    /// The budget is kept in whole milliseconds, rounded up, so a longer
    /// `limit` never yields a shorter budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        let millis = u64::try_from(limit.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX);
        self.config = self.config.with_termination_millis(millis);
        self
    }

    pub fn with_solver_listener(mut self, listener: Arc<dyn SolverEventListener>) -> Self {
        self.events.add_solver_listener(listener);
        self
    }

    pub fn with_decision_listener(mut self, listener: Arc<dyn DecisionListener>) -> Self {
        self.events.add_decision_listener(listener);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The flag [`terminate_early`](Self::terminate_early) sets.
    ///
    /// Listeners may hold a clone to stop the search from inside a callback.
    pub fn terminate_flag(&self) -> Arc<AtomicBool> {
        self.terminate_early_flag.clone()
    }

    /// Requests early termination of the solving process.
    ///
    /// This method is thread-safe and can be called from another thread.
    /// Returns false if no solve is running.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Colors `graph` with as few colors as the budget allows.
    ///
    /// # Errors
    ///
    /// Returns [`ChromaForgeError::Infeasible`] if the graph has a self-loop.
    pub fn solve(&self, graph: &Graph) -> Result<ColoringResult> {
        self.solve_detailed(graph).map(|report| report.result)
    }

    /// Like [`solve`](Self::solve), also returning the search status and statistics.
    pub fn solve_detailed(&self, graph: &Graph) -> Result<SolveReport> {
        let n = graph.vertex_count();
        let policy = TerminationPolicy::with_flag(
            &self.config.termination,
            n,
            self.terminate_early_flag.clone(),
        );

        info!(
            event = "solve_start",
            vertex_count = n,
            edge_count = graph.edge_count(),
            time_limit_ms = u64::try_from(policy.time_limit().as_millis()).unwrap_or(u64::MAX),
            improvement_cap = policy.improvement_cap().unwrap_or(0),
            propagation = %self.config.search.propagation,
            bounder = %self.config.search.bounder,
        );

        if let Some(&vertex) = graph.self_loops().first() {
            warn!(event = "infeasible", vertex, "self-loop makes the graph uncolorable");
            return Err(ChromaForgeError::Infeasible { vertex });
        }

        // a stop requested once `solving` is visible must survive
        self.terminate_early_flag.store(false, Ordering::SeqCst);
        self.solving.store(true, Ordering::SeqCst);
        self.events.fire_solving_started(graph);

        let lower_bound = if self.config.search.clique_lower_bound {
            clique_lower_bound(graph, DEFAULT_CLIQUE_STARTS)
        } else {
            n.min(1)
        };

        let search = &self.config.search;
        let outcome = match (search.propagation, search.bounder) {
            (PropagationType::ForwardChecking, BounderType::UsedColors) => {
                self.run_search(graph, ForwardChecking, UsedColorBounder, policy, lower_bound)
            }
            (PropagationType::ForwardChecking, BounderType::Saturation) => {
                self.run_search(graph, ForwardChecking, SaturationBounder, policy, lower_bound)
            }
            (PropagationType::AssignmentCheck, BounderType::UsedColors) => {
                self.run_search(graph, AssignmentCheck, UsedColorBounder, policy, lower_bound)
            }
            (PropagationType::AssignmentCheck, BounderType::Saturation) => {
                self.run_search(graph, AssignmentCheck, SaturationBounder, policy, lower_bound)
            }
        };

        let result = extract_result(&outcome.bound, &outcome.status);
        self.events.fire_search_stopped(&outcome.status, &result);
        self.solving.store(false, Ordering::SeqCst);

        info!(
            event = "solve_end",
            colors = result.color_count,
            optimal = result.is_optimal,
            status = %outcome.status,
            lower_bound = outcome.bound.lower_bound(),
            decisions = outcome.stats.decisions,
            backtracks = outcome.stats.backtracks,
            duration_ms = outcome.stats.elapsed().as_millis() as u64,
        );

        Ok(SolveReport {
            result,
            status: outcome.status,
            lower_bound: outcome.bound.lower_bound(),
            stats: outcome.stats,
        })
    }

    fn run_search<P, B>(
        &self,
        graph: &Graph,
        propagator: P,
        bounder: B,
        policy: TerminationPolicy,
        lower_bound: usize,
    ) -> SearchOutcome
    where
        P: Propagator,
        B: Bounder,
    {
        let engine = ConstraintEngine::new(
            propagator,
            SymmetryBreaking::new(self.config.search.symmetry_breaking),
        );
        SearchDriver::new(graph, &engine, bounder, policy, &self.events)
            .with_check_interval(self.config.search.check_interval)
            .with_lower_bound(lower_bound)
            .run()
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
