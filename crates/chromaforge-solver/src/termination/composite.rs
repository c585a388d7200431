//! Composite OR termination.
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use super::{StopReason, Termination};
use crate::scope::SolverScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// Children are checked in tuple order; the first reason found wins.
///
/// # Examples
///
/// ```
/// use chromaforge_solver::termination::{
///     DecisionCountTermination, OrTermination, Termination, TimeTermination,
/// };
/// use chromaforge_solver::SolverScope;
///
/// // Terminate after 30 seconds OR 1000 decisions
/// let termination = OrTermination::new((
///     TimeTermination::seconds(30),
///     DecisionCountTermination::new(1000),
/// ));
///
/// let mut scope = SolverScope::new();
/// scope.start_solving();
/// assert_eq!(termination.check(&scope), None);
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, solver_scope: &SolverScope) -> Option<StopReason> {
                None$(.or_else(|| (self.0).$idx.check(solver_scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
