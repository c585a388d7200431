//! Turns a finished search into a [`ColoringResult`].

use chromaforge_core::ColoringResult;

use crate::bound::BoundManager;
use crate::search::SearchStatus;

/// Builds the final answer from the incumbent and the way the search ended.
///
/// The incumbent is the trivial coloring when nothing better was found, so
/// a feasible answer is always returned. Optimality is claimed only when the
/// search proved it.
///
/// # Example
///
/// ```
/// use chromaforge_solver::{extract_result, BoundManager};
/// use chromaforge_solver::search::SearchStatus;
/// use chromaforge_solver::termination::StopReason;
///
/// let mut bound = BoundManager::new(3);
/// bound.record_solution(&[0, 1, 0]);
///
/// let result = extract_result(&bound, &SearchStatus::Stopped(StopReason::TimeLimit));
/// assert_eq!(result.color_count, 2);
/// assert!(!result.is_optimal);
/// ```
pub fn extract_result(bound: &BoundManager, status: &SearchStatus) -> ColoringResult {
    ColoringResult::new(
        bound.best_count(),
        status.is_proven_optimal(),
        bound.best_assignment().to_vec(),
    )
}
