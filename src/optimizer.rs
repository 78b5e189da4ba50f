//! The optimization pipeline.
//!
//! raw tasks → [`build_tasks`] → [`order_tasks`] → [`GreedyAllocator`] →
//! [`compute_metrics`]
//!
//! [`Optimizer`] is stateless and returns its results directly.
//! [`CachedOptimizer`] additionally remembers the last successful result
//! and serializes calls through a mutex.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::OptimizerConfig;
use crate::error::OptimizeError;
use crate::models::{Constraints, Metrics, RawTask, ResourcePool, Schedule};
use crate::ordering::order_tasks;
use crate::scheduler::{compute_metrics, GreedyAllocator, MetricsOptions};
use crate::validation::build_tasks;

/// Output of one optimize call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub schedule: Schedule,
    pub metrics: Metrics,
}

/// Stateless optimization engine.
///
/// # Example
///
/// ```
/// use task_optimizer::{Optimizer, RawTask};
///
/// let tasks = vec![
///     RawTask::new(1).with_duration(3).with_priority(1),
///     RawTask::new(2).with_duration(2).with_priority(5),
///     RawTask::new(3).with_duration(1).with_priority(5),
/// ];
/// let resources = vec!["A".to_string(), "B".to_string()];
///
/// let result = Optimizer::new().optimize(&tasks, &resources, None).unwrap();
/// assert_eq!(result.metrics.total_project_duration, 4);
/// assert_eq!(result.metrics.resource_utilization, 75.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given configuration.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Builds, orders, allocates and measures in one call.
    ///
    /// `constraints` is accepted for forward compatibility and does not
    /// influence allocation.
    ///
    /// # Errors
    /// - [`OptimizeError::Input`] for an empty or duplicated resource list.
    /// - [`OptimizeError::Validation`] for bad task data.
    pub fn optimize(
        &self,
        tasks: &[RawTask],
        resources: &[String],
        constraints: Option<&Constraints>,
    ) -> Result<OptimizationResult, OptimizeError> {
        let started = Instant::now();

        let pool = ResourcePool::new(resources).map_err(|e| {
            warn!(error = %e, "rejected resources");
            OptimizeError::from(e)
        })?;

        let tasks = build_tasks(tasks, self.config.dependency_mode).map_err(|errors| {
            warn!(count = errors.len(), "rejected tasks");
            OptimizeError::Validation(errors)
        })?;
        debug!(
            tasks = tasks.len(),
            resources = pool.len(),
            "built tasks"
        );
        if let Some(c) = constraints.filter(|c| !c.is_empty()) {
            debug!(keys = ?c.keys().collect::<Vec<_>>(), "constraints not applied to allocation");
        }

        let order = order_tasks(&tasks, self.config.dependency_mode).map_err(|e| {
            warn!(error = %e, "rejected task order");
            OptimizeError::from(e)
        })?;

        let schedule = GreedyAllocator::new()
            .with_dependency_mode(self.config.dependency_mode)
            .allocate(&tasks, &order, &pool);

        let metrics = compute_metrics(
            &schedule,
            pool.len(),
            started,
            MetricsOptions {
                decimals: self.config.decimals,
                on_time_placeholder: self.config.report_on_time_placeholder,
            },
        );

        info!(
            tasks = metrics.total_tasks,
            makespan = metrics.total_project_duration,
            utilization = metrics.resource_utilization,
            "optimization complete"
        );

        Ok(OptimizationResult { schedule, metrics })
    }
}

/// An [`Optimizer`] that keeps the most recent successful result.
///
/// Calls to [`CachedOptimizer::optimize`] are serialized: the lock is held
/// for the whole pipeline, so the cached schedule and metrics always come
/// from the same call. A failed call leaves the cache untouched.
#[derive(Debug, Default)]
pub struct CachedOptimizer {
    optimizer: Optimizer,
    last: Mutex<Option<OptimizationResult>>,
}

impl CachedOptimizer {
    /// Creates a cached optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cached optimizer with the given configuration.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            optimizer: Optimizer::with_config(config),
            last: Mutex::new(None),
        }
    }

    /// Runs the pipeline and caches the result on success.
    pub fn optimize(
        &self,
        tasks: &[RawTask],
        resources: &[String],
        constraints: Option<&Constraints>,
    ) -> Result<OptimizationResult, OptimizeError> {
        let mut last = self.lock();
        let result = self.optimizer.optimize(tasks, resources, constraints)?;
        *last = Some(result.clone());
        Ok(result)
    }

    /// Schedule from the last successful call, if any.
    pub fn get_schedule(&self) -> Option<Schedule> {
        self.lock().as_ref().map(|r| r.schedule.clone())
    }

    /// Metrics from the last successful call, if any.
    pub fn get_metrics(&self) -> Option<Metrics> {
        self.lock().as_ref().map(|r| r.metrics.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Option<OptimizationResult>> {
        // The cache is only ever replaced whole, so a poisoned value is intact
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyMode;
    use crate::error::InputError;
    use crate::models::{ScheduleEntry, ON_TIME_PLACEHOLDER};
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;
    use std::thread;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn example_tasks() -> Vec<RawTask> {
        vec![
            RawTask::new(1).with_duration(3).with_priority(1),
            RawTask::new(2).with_duration(2).with_priority(5),
            RawTask::new(3).with_duration(1).with_priority(5),
        ]
    }

    #[test]
    fn test_worked_example() {
        let result = Optimizer::new()
            .optimize(&example_tasks(), &teams(&["A", "B"]), None)
            .unwrap();

        let s = &result.schedule;
        assert_eq!(s.get(3), Some(&ScheduleEntry::new("A", 0, 1)));
        assert_eq!(s.get(2), Some(&ScheduleEntry::new("B", 0, 2)));
        assert_eq!(s.get(1), Some(&ScheduleEntry::new("A", 1, 3)));

        let m = &result.metrics;
        assert_eq!(m.total_project_duration, 4);
        assert_eq!(m.total_tasks, 3);
        assert_eq!(m.total_task_duration, 6);
        assert_eq!(m.resource_utilization, 75.0);
        assert_eq!(m.on_time_probability, None);
        assert!(m.processing_time_seconds >= 0.0);
    }

    #[test]
    fn test_defaults_from_json_descriptors() {
        let tasks: Vec<RawTask> =
            serde_json::from_str(r#"[{"id": 1}, {"id": 2, "duration": 4}]"#).unwrap();
        let result = Optimizer::new()
            .optimize(&tasks, &teams(&["A"]), None)
            .unwrap();
        // Equal priority: shorter task 1 first
        assert_eq!(result.schedule.get(1), Some(&ScheduleEntry::new("A", 0, 1)));
        assert_eq!(result.schedule.get(2), Some(&ScheduleEntry::new("A", 1, 4)));
        assert_eq!(result.metrics.resource_utilization, 100.0);
    }

    #[test]
    fn test_constraints_do_not_affect_schedule() {
        let optimizer = Optimizer::new();
        let constraints = Constraints::new().with("deadline", "2");
        let with = optimizer
            .optimize(&example_tasks(), &teams(&["A", "B"]), Some(&constraints))
            .unwrap();
        let without = optimizer
            .optimize(&example_tasks(), &teams(&["A", "B"]), None)
            .unwrap();
        assert_eq!(with.schedule, without.schedule);
    }

    #[test]
    fn test_empty_tasks() {
        let err = Optimizer::new()
            .optimize(&[], &teams(&["A"]), None)
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyTaskList
        );
    }

    #[test]
    fn test_empty_resources() {
        let err = Optimizer::new()
            .optimize(&example_tasks(), &[], None)
            .unwrap_err();
        assert_eq!(err, OptimizeError::Input(InputError::EmptyResources));
    }

    #[test]
    fn test_duplicate_task_ids_rejected() {
        let tasks = vec![RawTask::new(1), RawTask::new(1)];
        let err = Optimizer::new()
            .optimize(&tasks, &teams(&["A"]), None)
            .unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_deterministic() {
        let optimizer = Optimizer::new();
        let mut rng = SmallRng::seed_from_u64(11);
        let tasks: Vec<RawTask> = (0..25)
            .map(|id| {
                RawTask::new(id)
                    .with_duration(rng.random_range(1..=9))
                    .with_priority(rng.random_range(1..=3))
            })
            .collect();
        let resources = teams(&["A", "B", "C"]);

        let first = optimizer.optimize(&tasks, &resources, None).unwrap();
        let second = optimizer.optimize(&tasks, &resources, None).unwrap();
        assert_eq!(first.schedule, second.schedule);

        let mut m1 = first.metrics;
        let mut m2 = second.metrics;
        m1.processing_time_seconds = 0.0;
        m2.processing_time_seconds = 0.0;
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_metrics_match_schedule() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..30 {
            let n = rng.random_range(1..=30);
            let tasks: Vec<RawTask> = (0..n)
                .map(|id| {
                    RawTask::new(id)
                        .with_duration(rng.random_range(1..=15))
                        .with_priority(rng.random_range(0..=4))
                })
                .collect();
            let count = rng.random_range(1..=5);
            let resources: Vec<String> = (0..count).map(|i| format!("T{i}")).collect();

            let result = Optimizer::new().optimize(&tasks, &resources, None).unwrap();
            let s = &result.schedule;
            let m = &result.metrics;

            assert_eq!(s.len(), tasks.len());
            let max_end = s.iter().map(|(_, e)| e.end).max().unwrap();
            assert_eq!(m.total_project_duration, max_end);

            let busy: i64 = s.iter().map(|(_, e)| e.duration).sum();
            let expected = busy as f64 / (max_end as f64 * count as f64) * 100.0;
            assert!((m.resource_utilization - (expected * 100.0).round() / 100.0).abs() < 1e-9);
            assert!((0.0..=100.0).contains(&m.resource_utilization));
        }
    }

    #[test]
    fn test_duration_overflow_rejected() {
        let half = i64::MAX / 2 + 1;
        let tasks = vec![
            RawTask::new(1).with_duration(half),
            RawTask::new(2).with_duration(half),
        ];
        let err = Optimizer::new()
            .optimize(&tasks, &teams(&["A"]), None)
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::DurationOverflow
        );
    }

    #[test]
    fn test_durations_up_to_limit() {
        let tasks = vec![
            RawTask::new(1).with_duration(i64::MAX - 1),
            RawTask::new(2).with_duration(1).with_priority(0),
        ];
        let result = Optimizer::new()
            .optimize(&tasks, &teams(&["A"]), None)
            .unwrap();
        assert_eq!(result.schedule.get(2), Some(&ScheduleEntry::new("A", i64::MAX - 1, 1)));
        assert_eq!(result.metrics.total_project_duration, i64::MAX);
        assert_eq!(result.metrics.total_task_duration, i64::MAX);
    }

    #[test]
    fn test_json_constraints_accepted() {
        let constraints: Constraints =
            serde_json::from_str(r#"{"deadline": 30, "teams": ["A"]}"#).unwrap();
        let result = Optimizer::new()
            .optimize(&example_tasks(), &teams(&["A", "B"]), Some(&constraints))
            .unwrap();
        assert_eq!(result.metrics.total_project_duration, 4);
    }

    #[test]
    fn test_enforced_dependencies() {
        let config = OptimizerConfig::new().with_dependency_mode(DependencyMode::Enforce);
        let tasks = vec![
            RawTask::new(1).with_duration(4),
            RawTask::new(2).with_priority(9).with_depends_on(vec![1]),
        ];
        let result = Optimizer::with_config(config)
            .optimize(&tasks, &teams(&["A", "B"]), None)
            .unwrap();
        assert_eq!(result.schedule.get(1), Some(&ScheduleEntry::new("A", 0, 4)));
        assert_eq!(result.schedule.get(2), Some(&ScheduleEntry::new("A", 4, 1)));
    }

    #[test]
    fn test_enforced_cycle_rejected() {
        let config = OptimizerConfig::new().with_dependency_mode(DependencyMode::Enforce);
        let tasks = vec![
            RawTask::new(1).with_depends_on(vec![2]),
            RawTask::new(2).with_depends_on(vec![1]),
        ];
        let err = Optimizer::with_config(config)
            .optimize(&tasks, &teams(&["A"]), None)
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::CyclicDependency
        );
    }

    #[test]
    fn test_on_time_placeholder_opt_in() {
        let config = OptimizerConfig::new().with_on_time_placeholder(true);
        let result = Optimizer::with_config(config)
            .optimize(&example_tasks(), &teams(&["A"]), None)
            .unwrap();
        assert_eq!(result.metrics.on_time_probability, Some(ON_TIME_PLACEHOLDER));
    }

    #[test]
    fn test_cache_empty_before_first_call() {
        let cached = CachedOptimizer::new();
        assert!(cached.get_schedule().is_none());
        assert!(cached.get_metrics().is_none());
    }

    #[test]
    fn test_cache_holds_last_result() {
        let cached = CachedOptimizer::new();
        let first = cached
            .optimize(&example_tasks(), &teams(&["A", "B"]), None)
            .unwrap();
        assert_eq!(cached.get_schedule(), Some(first.schedule));

        let second = cached
            .optimize(&[RawTask::new(9).with_duration(2)], &teams(&["X"]), None)
            .unwrap();
        assert_eq!(cached.get_schedule(), Some(second.schedule));
        assert_eq!(cached.get_metrics().unwrap().total_tasks, 1);
    }

    #[test]
    fn test_cache_unchanged_on_failure() {
        let cached = CachedOptimizer::new();
        let ok = cached
            .optimize(&example_tasks(), &teams(&["A", "B"]), None)
            .unwrap();

        assert!(cached.optimize(&[], &teams(&["A"]), None).is_err());
        assert!(cached.optimize(&example_tasks(), &[], None).is_err());

        assert_eq!(cached.get_schedule(), Some(ok.schedule));
        assert_eq!(cached.get_metrics(), Some(ok.metrics));
    }

    #[test]
    fn test_cache_concurrent_calls() {
        let cached = Arc::new(CachedOptimizer::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cached = Arc::clone(&cached);
                thread::spawn(move || {
                    let tasks = vec![RawTask::new(i).with_duration(i + 1)];
                    cached.optimize(&tasks, &teams(&["A"]), None).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whatever call won last, schedule and metrics belong together
        let schedule = cached.get_schedule().unwrap();
        let metrics = cached.get_metrics().unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(metrics.total_project_duration, schedule.makespan());
    }
}
