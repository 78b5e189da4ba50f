//! Schedule performance metrics.

use serde::{Deserialize, Serialize};

/// Legacy constant reported as `on_time_probability` when the placeholder
/// is requested. It is not derived from the schedule.
pub const ON_TIME_PLACEHOLDER: f64 = 94.0;

/// Aggregate statistics for one optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Makespan: latest end time across all entries.
    pub total_project_duration: i64,
    /// Number of scheduled tasks.
    pub total_tasks: usize,
    /// Sum of task durations.
    pub total_task_duration: i64,
    /// Busy share of available resource-time, in percent (0..=100).
    pub resource_utilization: f64,
    /// Placeholder carried for compatibility. `None` unless explicitly
    /// enabled; never a computed statistic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_time_probability: Option<f64>,
    /// Wall-clock time of the whole optimize call, in seconds.
    pub processing_time_seconds: f64,
}
