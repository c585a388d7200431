//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [termination]
        seconds_spent_limit = 30
        medium_threshold = 80
        large_threshold = 400
        improvement_cap_medium = 4

        [search]
        propagation = "assignment_check"
        bounder = "saturation"
        symmetry_breaking = false
        check_interval = 64
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.termination.seconds_spent_limit, Some(30));
    assert_eq!(config.termination.medium_threshold, 80);
    assert_eq!(config.termination.large_threshold, 400);
    assert_eq!(config.termination.improvement_cap_medium, 4);
    assert_eq!(
        config.termination.improvement_cap_large,
        DEFAULT_IMPROVEMENT_CAP_LARGE
    );
    assert_eq!(config.search.propagation, PropagationType::AssignmentCheck);
    assert_eq!(config.search.bounder, BounderType::Saturation);
    assert!(!config.search.symmetry_breaking);
    assert!(config.search.clique_lower_bound);
    assert_eq!(config.search.check_interval, 64);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        termination:
          minutes_spent_limit: 2
          decision_count_limit: 5000
        search:
          bounder: used_colors
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.time_limit(), Duration::from_secs(120));
    assert_eq!(config.termination.decision_count_limit, Some(5000));
    assert_eq!(config.search.bounder, BounderType::UsedColors);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(
        config.time_limit(),
        Duration::from_secs(DEFAULT_TIME_LIMIT_SECS)
    );
}

#[test]
fn test_improvement_cap_bands() {
    let termination = TerminationConfig::default();

    assert_eq!(termination.improvement_cap_for(0), None);
    assert_eq!(termination.improvement_cap_for(69), None);
    assert_eq!(termination.improvement_cap_for(70), Some(3));
    assert_eq!(termination.improvement_cap_for(249), Some(3));
    assert_eq!(termination.improvement_cap_for(250), Some(2));
    assert_eq!(termination.improvement_cap_for(10_000), Some(2));
}

#[test]
fn test_time_limit_units_add_up() {
    let termination = TerminationConfig {
        millis_spent_limit: Some(500),
        seconds_spent_limit: Some(1),
        ..TerminationConfig::default()
    };

    assert_eq!(termination.time_limit(), Duration::from_millis(1_500));
}

#[test]
fn test_explicit_zero_is_a_zero_budget() {
    let termination = TerminationConfig {
        millis_spent_limit: Some(0),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Duration::ZERO);

    let config = SolverConfig::from_toml_str("[termination]\nseconds_spent_limit = 0").unwrap();
    assert_eq!(config.time_limit(), Duration::ZERO);
}

#[test]
fn test_huge_time_limits_saturate() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX / 10),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Duration::from_secs(u64::MAX / 10));

    let termination = TerminationConfig {
        minutes_spent_limit: Some(u64::MAX),
        seconds_spent_limit: Some(1),
        millis_spent_limit: Some(u64::MAX),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Duration::MAX);

    let config = SolverConfig::new().with_termination_seconds(u64::MAX);
    assert_eq!(config.time_limit(), Duration::from_secs(u64::MAX));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let toml = r#"
        [termination]
        medium_threshold = 300
        large_threshold = 100
    "#;

    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_check_interval_rejected() {
    let err = SolverConfig::from_toml_str("[search]\ncheck_interval = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/chromaforge/solver.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_termination_seconds(60)
        .with_decision_limit(10)
        .with_search(SearchConfig {
            bounder: BounderType::Saturation,
            ..SearchConfig::default()
        });

    assert_eq!(config.time_limit(), Duration::from_secs(60));
    assert_eq!(config.termination.decision_count_limit, Some(10));
    assert_eq!(config.search.bounder, BounderType::Saturation);

    let config = config.with_termination_millis(250);
    assert_eq!(config.time_limit(), Duration::from_millis(250));
}

#[test]
fn test_display() {
    assert_eq!(
        format!("{}", PropagationType::ForwardChecking),
        "ForwardChecking"
    );
    assert_eq!(format!("{}", BounderType::Saturation), "Saturation");
}
