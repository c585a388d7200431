//! Incumbent tracking and pruning decisions.

use chromaforge_core::{distinct_colors, Color};

/// Keeps the best complete coloring found so far and the proven lower bound.
///
/// Starts from the trivial coloring (vertex `v` gets color `v`), so a
/// feasible answer always exists. Only a strictly smaller color count
/// replaces the incumbent.
///
/// # Example
///
/// ```
/// use chromaforge_solver::BoundManager;
///
/// let mut bound = BoundManager::new(4);
/// assert_eq!(bound.best_count(), 4);
/// assert_eq!(bound.color_ceiling(), 3);
///
/// assert!(bound.record_solution(&[0, 1, 0, 1]));
/// assert!(!bound.record_solution(&[1, 0, 1, 0]));
/// assert_eq!(bound.best_count(), 2);
/// assert!(bound.can_prune(2));
/// assert!(!bound.can_prune(1));
/// ```
#[derive(Debug, Clone)]
pub struct BoundManager {
    best_count: usize,
    best: Vec<Color>,
    lower_bound: usize,
    improvements: u64,
}

impl BoundManager {
    /// Creates a manager holding the trivial coloring of `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            best_count: n,
            best: (0..n).collect(),
            lower_bound: 0,
            improvements: 0,
        }
    }

    /// Offers a complete proper coloring. Returns true if it became the incumbent.
    pub fn record_solution(&mut self, colors: &[Color]) -> bool {
        let count = distinct_colors(colors);
        if count >= self.best_count {
            return false;
        }
        self.best_count = count;
        self.best.clear();
        self.best.extend_from_slice(colors);
        self.improvements += 1;
        true
    }

    pub fn best_count(&self) -> usize {
        self.best_count
    }

    pub fn best_assignment(&self) -> &[Color] {
        &self.best
    }

    pub fn into_best_assignment(self) -> Vec<Color> {
        self.best
    }

    /// Number of times the incumbent improved.
    pub fn improvement_count(&self) -> u64 {
        self.improvements
    }

    /// Exclusive color limit for the search.
    ///
    /// An improving coloring uses at most `best_count - 1` colors and can be
    /// relabeled so that its colors are exactly `0..best_count - 1`, so no
    /// color at or above the ceiling needs to be tried.
    pub fn color_ceiling(&self) -> Color {
        self.best_count.saturating_sub(1)
    }

    /// Returns true if a node whose lower bound is `bound` cannot improve the incumbent.
    pub fn can_prune(&self, bound: usize) -> bool {
        bound >= self.best_count
    }

    pub fn set_lower_bound(&mut self, lower_bound: usize) {
        self.lower_bound = self.lower_bound.max(lower_bound);
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Returns true once the incumbent meets the lower bound.
    pub fn is_proven_optimal(&self) -> bool {
        self.best_count <= self.lower_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_incumbent() {
        let bound = BoundManager::new(3);

        assert_eq!(bound.best_assignment(), &[0, 1, 2]);
        assert_eq!(bound.improvement_count(), 0);
        assert!(!bound.is_proven_optimal());
    }

    #[test]
    fn test_only_strict_improvement_counts() {
        let mut bound = BoundManager::new(5);

        assert!(!bound.record_solution(&[4, 3, 2, 1, 0]));
        assert!(bound.record_solution(&[0, 1, 2, 0, 1]));
        assert!(!bound.record_solution(&[2, 1, 0, 2, 1]));
        assert!(bound.record_solution(&[0, 1, 0, 1, 0]));

        assert_eq!(bound.improvement_count(), 2);
        assert_eq!(bound.best_assignment(), &[0, 1, 0, 1, 0]);
        assert_eq!(bound.color_ceiling(), 1);
    }

    #[test]
    fn test_lower_bound_proof() {
        let mut bound = BoundManager::new(4);
        bound.set_lower_bound(2);
        bound.set_lower_bound(1);
        assert_eq!(bound.lower_bound(), 2);

        bound.record_solution(&[0, 1, 2, 0]);
        assert!(!bound.is_proven_optimal());
        bound.record_solution(&[0, 1, 0, 1]);
        assert!(bound.is_proven_optimal());
    }

    #[test]
    fn test_empty_graph_is_proven() {
        let bound = BoundManager::new(0);

        assert_eq!(bound.best_count(), 0);
        assert_eq!(bound.color_ceiling(), 0);
        assert!(bound.is_proven_optimal());
    }
}
