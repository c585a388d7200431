//! Search statistics.
//!
//! Stack-allocated counters updated by the search driver.

use std::time::{Duration, Instant};

/// Search-level statistics.
///
/// # Example
///
/// ```
/// use chromaforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_decision(1);
/// stats.record_decision(2);
/// stats.record_backtrack();
/// stats.record_conflict();
///
/// assert_eq!(stats.decisions, 2);
/// assert_eq!(stats.max_depth, 2);
/// assert_eq!(stats.backtracks, 1);
/// assert_eq!(stats.conflicts, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// Color assignments that survived propagation.
    pub decisions: u64,
    /// Decisions undone.
    pub backtracks: u64,
    /// Assignments rejected by propagation.
    pub conflicts: u64,
    /// Nodes cut because their lower bound reached the incumbent.
    pub bound_prunes: u64,
    /// Complete colorings reached.
    pub solutions: u64,
    /// Complete colorings that improved the incumbent.
    pub improvements: u64,
    /// Deepest decision stack seen.
    pub max_depth: usize,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn record_decision(&mut self, depth: usize) {
        self.decisions += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_conflict(&mut self) {
        self.conflicts += 1;
    }

    pub fn record_bound_prune(&mut self) {
        self.bound_prunes += 1;
    }

    pub fn record_solution(&mut self, improved: bool) {
        self.solutions += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Returns the decisions per second rate.
    pub fn decisions_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.decisions as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_counters() {
        let mut stats = SolverStats::default();
        stats.record_solution(true);
        stats.record_solution(false);
        stats.record_bound_prune();

        assert_eq!(stats.solutions, 2);
        assert_eq!(stats.improvements, 1);
        assert_eq!(stats.bound_prunes, 1);
    }

    #[test]
    fn test_elapsed_frozen_after_finish() {
        let mut stats = SolverStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.decisions_per_second(), 0.0);

        stats.start();
        stats.finish();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
    }
}
