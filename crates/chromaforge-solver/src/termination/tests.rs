//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chromaforge_config::TerminationConfig;

use super::*;
use crate::scope::SolverScope;

fn started_scope() -> SolverScope {
    let mut scope = SolverScope::new();
    scope.start_solving();
    scope
}

#[test]
fn test_decision_count_termination() {
    let mut scope = started_scope();
    let term = DecisionCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_decision_count();
    scope.increment_decision_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_decision_count();
    assert_eq!(term.check(&scope), Some(StopReason::DecisionLimit));
}

#[test]
fn test_improvement_count_termination() {
    let mut scope = started_scope();
    let term = ImprovementCountTermination::new(2);

    scope.record_improvement(10);
    assert!(!term.is_terminated(&scope));
    scope.record_improvement(9);
    assert_eq!(term.check(&scope), Some(StopReason::ImprovementCap));
}

#[test]
fn test_time_termination() {
    let scope = started_scope();

    assert_eq!(TimeTermination::seconds(60).check(&scope), None);
    thread::sleep(Duration::from_millis(5));
    assert_eq!(
        TimeTermination::millis(1).check(&scope),
        Some(StopReason::TimeLimit)
    );
}

#[test]
fn test_time_termination_before_start() {
    let scope = SolverScope::new();
    assert!(!TimeTermination::millis(0).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(flag.clone());
    let scope = started_scope();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert_eq!(term.check(&scope), Some(StopReason::External));
}

#[test]
fn test_policy_stops_on_its_flag() {
    let flag = Arc::new(AtomicBool::new(false));
    let policy = TerminationPolicy::with_flag(&TerminationConfig::default(), 10, flag.clone());
    let scope = started_scope();

    assert_eq!(policy.check(&scope), None);
    flag.store(true, Ordering::SeqCst);
    assert_eq!(policy.check(&scope), Some(StopReason::External));
}

#[test]
fn test_or_termination_first_reason_wins() {
    let mut scope = started_scope();
    scope.increment_decision_count();
    scope.record_improvement(4);

    let term = OrTermination::new((
        TimeTermination::seconds(60),
        ImprovementCountTermination::new(1),
        DecisionCountTermination::new(1),
    ));
    assert_eq!(term.check(&scope), Some(StopReason::ImprovementCap));

    let term = OrTermination::new((TimeTermination::seconds(60), NoTermination));
    assert_eq!(term.check(&scope), None);
}

#[test]
fn test_optional_termination() {
    let mut scope = started_scope();
    scope.increment_decision_count();

    let disabled: Option<DecisionCountTermination> = None;
    assert!(!disabled.is_terminated(&scope));
    assert!(Some(DecisionCountTermination::new(1)).is_terminated(&scope));
}

#[test]
fn test_policy_small_instance_has_no_cap() {
    let mut scope = started_scope();
    let policy = TerminationPolicy::for_instance(&TerminationConfig::default(), 69);

    for _ in 0..100 {
        scope.record_improvement(1);
    }
    assert_eq!(policy.improvement_cap(), None);
    assert_eq!(policy.check(&scope), None);
}

#[test]
fn test_policy_bands() {
    let config = TerminationConfig::default();
    let mut scope = started_scope();
    scope.record_improvement(30);
    scope.record_improvement(29);

    let medium = TerminationPolicy::for_instance(&config, 70);
    let large = TerminationPolicy::for_instance(&config, 250);
    assert_eq!(medium.check(&scope), None);
    assert_eq!(large.check(&scope), Some(StopReason::ImprovementCap));

    scope.record_improvement(28);
    assert_eq!(medium.check(&scope), Some(StopReason::ImprovementCap));
}

#[test]
fn test_policy_decision_limit_and_flag() {
    let config = TerminationConfig {
        decision_count_limit: Some(2),
        ..TerminationConfig::default()
    };
    let flag = Arc::new(AtomicBool::new(false));
    let policy = TerminationPolicy::with_flag(&config, 10, flag.clone());
    let mut scope = started_scope();

    assert_eq!(policy.time_limit(), config.time_limit());
    scope.increment_decision_count();
    assert_eq!(policy.check(&scope), None);

    flag.store(true, Ordering::SeqCst);
    scope.increment_decision_count();
    assert_eq!(policy.check(&scope), Some(StopReason::External));

    flag.store(false, Ordering::SeqCst);
    assert_eq!(policy.check(&scope), Some(StopReason::DecisionLimit));
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::TimeLimit.to_string(), "time limit");
    assert_eq!(StopReason::External.to_string(), "external request");
}
