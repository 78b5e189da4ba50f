//! Schedule quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total project duration (C_max) | Latest end time |
//! | Total tasks | Number of entries |
//! | Total task duration | Sum of entry durations |
//! | Resource utilization | Σ duration / (C_max × resources) × 100 |
//! | Processing time | Wall-clock seconds of the optimize call |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::time::Instant;

use crate::models::{Metrics, Schedule, ON_TIME_PLACEHOLDER};

/// Options affecting how metrics are reported.
#[derive(Debug, Clone, Copy)]
pub struct MetricsOptions {
    /// Decimal places for the floating-point fields.
    pub decimals: u32,
    /// Whether to fill `on_time_probability` with the legacy constant.
    pub on_time_placeholder: bool,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            on_time_placeholder: false,
        }
    }
}

/// Computes metrics for a schedule over `resource_count` resources.
///
/// `started` marks the beginning of the pipeline. The clock is read after
/// every other field is computed, so processing time covers this stage too.
pub fn compute_metrics(
    schedule: &Schedule,
    resource_count: usize,
    started: Instant,
    options: MetricsOptions,
) -> Metrics {
    let makespan = schedule.makespan();
    let total_duration = schedule.total_duration();
    let utilization = round_to(
        utilization_percent(total_duration, makespan, resource_count),
        options.decimals,
    );

    Metrics {
        total_project_duration: makespan,
        total_tasks: schedule.len(),
        total_task_duration: total_duration,
        resource_utilization: utilization,
        on_time_probability: options.on_time_placeholder.then_some(ON_TIME_PLACEHOLDER),
        processing_time_seconds: round_to(started.elapsed().as_secs_f64(), options.decimals),
    }
}

/// Busy share of available resource-time, in percent.
///
/// Returns 0 when `makespan × resource_count` is 0.
pub fn utilization_percent(busy: i64, makespan: i64, resource_count: usize) -> f64 {
    let capacity = makespan as f64 * resource_count as f64;
    if capacity <= 0.0 {
        return 0.0;
    }
    busy as f64 / capacity * 100.0
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
