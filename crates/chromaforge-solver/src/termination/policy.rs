//! Size-banded termination policy.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use chromaforge_config::TerminationConfig;

use super::{
    DecisionCountTermination, ExternalTermination, ImprovementCountTermination, OrTermination,
    StopReason, Termination, TimeTermination,
};
use crate::scope::SolverScope;

type PolicyTerminations = OrTermination<(
    ExternalTermination,
    TimeTermination,
    Option<ImprovementCountTermination>,
    Option<DecisionCountTermination>,
)>;

/// The termination schedule applied to one instance.
///
/// Stops on whichever comes first: an external request, the time budget,
/// the improvement cap of the instance's size band, or the decision limit.
/// Small instances have no improvement cap and search until the tree is
/// exhausted or time runs out.
///
/// # Example
///
/// ```
/// use chromaforge_config::TerminationConfig;
/// use chromaforge_solver::termination::TerminationPolicy;
///
/// let config = TerminationConfig::default();
/// assert_eq!(TerminationPolicy::for_instance(&config, 50).improvement_cap(), None);
/// assert_eq!(TerminationPolicy::for_instance(&config, 100).improvement_cap(), Some(3));
/// assert_eq!(TerminationPolicy::for_instance(&config, 500).improvement_cap(), Some(2));
/// ```
#[derive(Debug)]
pub struct TerminationPolicy {
    time_limit: Duration,
    improvement_cap: Option<u64>,
    inner: PolicyTerminations,
}

impl TerminationPolicy {
    /// Builds the policy for an instance with `vertex_count` vertices.
    pub fn for_instance(config: &TerminationConfig, vertex_count: usize) -> Self {
        Self::with_flag(config, vertex_count, Arc::new(AtomicBool::new(false)))
    }

    /// Like [`for_instance`](Self::for_instance), also stopping when `flag` is set.
    pub fn with_flag(
        config: &TerminationConfig,
        vertex_count: usize,
        flag: Arc<AtomicBool>,
    ) -> Self {
        let time_limit = config.time_limit();
        let improvement_cap = config.improvement_cap_for(vertex_count);
        let inner = OrTermination::new((
            ExternalTermination::new(flag),
            TimeTermination::new(time_limit),
            improvement_cap.map(ImprovementCountTermination::new),
            config.decision_count_limit.map(DecisionCountTermination::new),
        ));
        Self {
            time_limit,
            improvement_cap,
            inner,
        }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn improvement_cap(&self) -> Option<u64> {
        self.improvement_cap
    }
}

impl Termination for TerminationPolicy {
    fn check(&self, solver_scope: &SolverScope) -> Option<StopReason> {
        self.inner.check(solver_scope)
    }
}
