//! Optimizer configuration.

use serde::{Deserialize, Serialize};

/// How the `depends_on` field of tasks is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyMode {
    /// Dependencies are carried but never consulted.
    #[default]
    Ignore,
    /// Dependencies are validated (known ids, no cycles), tasks are ordered
    /// topologically, and no task starts before its dependencies end.
    Enforce,
}

/// Settings for [`crate::Optimizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Dependency handling.
    pub dependency_mode: DependencyMode,
    /// Report the legacy `on_time_probability` constant in metrics.
    pub report_on_time_placeholder: bool,
    /// Decimal places for utilization and processing time.
    pub decimals: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            dependency_mode: DependencyMode::Ignore,
            report_on_time_placeholder: false,
            decimals: 2,
        }
    }
}

impl OptimizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dependency mode.
    pub fn with_dependency_mode(mut self, mode: DependencyMode) -> Self {
        self.dependency_mode = mode;
        self
    }

    /// Enables or disables the on-time placeholder.
    pub fn with_on_time_placeholder(mut self, enabled: bool) -> Self {
        self.report_on_time_placeholder = enabled;
        self
    }

    /// Sets the rounding precision.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Whether dependencies are enforced.
    pub fn enforces_dependencies(&self) -> bool {
        self.dependency_mode == DependencyMode::Enforce
    }
}
