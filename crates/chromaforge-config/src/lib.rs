//! Configuration system for ChromaForge.
//!
//! Load solver configuration from TOML or YAML files to control the time
//! budget, the size-banded improvement caps and the search strategy without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use chromaforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [termination]
//!     seconds_spent_limit = 30
//!     medium_threshold = 100
//!
//!     [search]
//!     propagation = "forward_checking"
//!     bounder = "saturation"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Duration::from_secs(30));
//! assert_eq!(config.termination.improvement_cap_for(50), None);
//! assert_eq!(config.termination.improvement_cap_for(100), Some(3));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use chromaforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default wall-clock budget.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 300;

/// Vertex count from which an instance is considered medium-sized.
pub const DEFAULT_MEDIUM_THRESHOLD: usize = 70;

/// Vertex count from which an instance is considered large.
pub const DEFAULT_LARGE_THRESHOLD: usize = 250;

/// Improvements after which a medium instance stops.
pub const DEFAULT_IMPROVEMENT_CAP_MEDIUM: u64 = 3;

/// Improvements after which a large instance stops.
pub const DEFAULT_IMPROVEMENT_CAP_LARGE: u64 = 2;

/// Decisions between two periodic termination checks.
pub const DEFAULT_CHECK_INTERVAL: u64 = 1024;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Termination configuration.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// Search strategy configuration.
    #[serde(default)]
    pub search: SearchConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.termination;
        if t.large_threshold < t.medium_threshold {
            return Err(ConfigError::Invalid(format!(
                "large_threshold ({}) must not be below medium_threshold ({})",
                t.large_threshold, t.medium_threshold
            )));
        }
        if t.improvement_cap_medium == 0 || t.improvement_cap_large == 0 {
            return Err(ConfigError::Invalid(
                "improvement caps must be at least 1".to_string(),
            ));
        }
        if self.search.check_interval == 0 {
            return Err(ConfigError::Invalid(
                "check_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination.seconds_spent_limit = Some(seconds);
        self.termination.minutes_spent_limit = None;
        self.termination.millis_spent_limit = None;
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination.millis_spent_limit = Some(millis);
        self.termination.seconds_spent_limit = None;
        self.termination.minutes_spent_limit = None;
        self
    }

    /// Caps the number of search decisions.
    pub fn with_decision_limit(mut self, limit: u64) -> Self {
        self.termination.decision_count_limit = Some(limit);
        self
    }

    /// Replaces the search configuration.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Returns the wall-clock budget.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Duration {
        self.termination.time_limit()
    }
}

/// Termination configuration.
///
/// The size bands reproduce an empirically tuned schedule: instances below
/// `medium_threshold` vertices search until exhaustion or timeout, medium
/// instances stop after `improvement_cap_medium` improvements and large ones
/// after `improvement_cap_large`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Vertex count from which the medium improvement cap applies.
    pub medium_threshold: usize,

    /// Vertex count from which the large improvement cap applies.
    pub large_threshold: usize,

    /// Improvements after which medium instances stop.
    pub improvement_cap_medium: u64,

    /// Improvements after which large instances stop.
    pub improvement_cap_large: u64,

    /// Maximum number of search decisions.
    pub decision_count_limit: Option<u64>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            seconds_spent_limit: None,
            minutes_spent_limit: None,
            millis_spent_limit: None,
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            large_threshold: DEFAULT_LARGE_THRESHOLD,
            improvement_cap_medium: DEFAULT_IMPROVEMENT_CAP_MEDIUM,
            improvement_cap_large: DEFAULT_IMPROVEMENT_CAP_LARGE,
            decision_count_limit: None,
        }
    }
}

impl TerminationConfig {
    /// Returns the time limit as a Duration.
    ///
    /// The set units add up, saturating at [`Duration::MAX`]. An explicit
    /// zero is a zero budget; only when no unit is set does the default
    /// budget apply.
    pub fn time_limit(&self) -> Duration {
        if self.millis_spent_limit.is_none()
            && self.seconds_spent_limit.is_none()
            && self.minutes_spent_limit.is_none()
        {
            return Duration::from_secs(DEFAULT_TIME_LIMIT_SECS);
        }

        let millis = Duration::from_millis(self.millis_spent_limit.unwrap_or(0));
        let seconds = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0));
        let minutes =
            Duration::from_secs(self.minutes_spent_limit.unwrap_or(0).saturating_mul(60));
        millis.saturating_add(seconds).saturating_add(minutes)
    }

    /// Returns the improvement cap for an instance with `vertex_count` vertices.
    ///
    /// `None` means the instance is small enough to search until exhaustion.
    pub fn improvement_cap_for(&self, vertex_count: usize) -> Option<u64> {
        if vertex_count >= self.large_threshold {
            Some(self.improvement_cap_large)
        } else if vertex_count >= self.medium_threshold {
            Some(self.improvement_cap_medium)
        } else {
            None
        }
    }
}

/// Search strategy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Propagation applied after each assignment.
    pub propagation: PropagationType,

    /// Lower bound used for branch-and-bound pruning.
    pub bounder: BounderType,

    /// Whether to enforce `color(v) <= v + 1`.
    pub symmetry_breaking: bool,

    /// Whether to compute a greedy clique lower bound to stop on a proven optimum.
    pub clique_lower_bound: bool,

    /// Decisions between two periodic termination checks.
    pub check_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            propagation: PropagationType::default(),
            bounder: BounderType::default(),
            symmetry_breaking: true,
            clique_lower_bound: true,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

/// Propagation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationType {
    /// Remove the assigned color from unassigned neighbors, fail on wipeout.
    #[default]
    ForwardChecking,

    /// Only check the assignment against already assigned neighbors.
    AssignmentCheck,
}

/// Lower bound strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BounderType {
    /// Distinct colors used by the partial assignment.
    #[default]
    UsedColors,

    /// Used colors, plus a greedy clique among the unassigned vertices that
    /// can only take a color not used yet.
    Saturation,
}

impl std::fmt::Display for PropagationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationType::ForwardChecking => write!(f, "ForwardChecking"),
            PropagationType::AssignmentCheck => write!(f, "AssignmentCheck"),
        }
    }
}

impl std::fmt::Display for BounderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BounderType::UsedColors => write!(f, "UsedColors"),
            BounderType::Saturation => write!(f, "Saturation"),
        }
    }
}

#[cfg(test)]
mod tests;
