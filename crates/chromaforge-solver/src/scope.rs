//! Solver-level scope.

use std::time::{Duration, Instant};

/// Counters shared between the search driver and termination conditions.
///
/// The scope is what a [`Termination`](crate::termination::Termination) gets
/// to look at: elapsed time, decisions made and improvements found.
#[derive(Debug, Default)]
pub struct SolverScope {
    start_time: Option<Instant>,
    decision_count: u64,
    improvement_count: u64,
    best_color_count: Option<usize>,
}

impl SolverScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.decision_count = 0;
        self.improvement_count = 0;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn increment_decision_count(&mut self) -> u64 {
        self.decision_count += 1;
        self.decision_count
    }

    pub fn decision_count(&self) -> u64 {
        self.decision_count
    }

    /// Records a strictly better coloring.
    pub fn record_improvement(&mut self, color_count: usize) -> u64 {
        self.improvement_count += 1;
        self.best_color_count = Some(color_count);
        self.improvement_count
    }

    pub fn improvement_count(&self) -> u64 {
        self.improvement_count
    }

    pub fn best_color_count(&self) -> Option<usize> {
        self.best_color_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut scope = SolverScope::new();
        assert!(scope.elapsed().is_none());

        scope.start_solving();
        assert!(scope.elapsed().is_some());
        assert_eq!(scope.increment_decision_count(), 1);
        assert_eq!(scope.increment_decision_count(), 2);
        assert_eq!(scope.record_improvement(5), 1);
        assert_eq!(scope.best_color_count(), Some(5));

        scope.start_solving();
        assert_eq!(scope.decision_count(), 0);
        assert_eq!(scope.improvement_count(), 0);
    }
}
