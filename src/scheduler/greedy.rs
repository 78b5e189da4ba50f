//! Greedy earliest-available allocator.
//!
//! # Algorithm
//!
//! 1. Order tasks (priority desc, duration asc; topological when
//!    dependencies are enforced).
//! 2. For each task, pick the resource with the earliest possible start:
//!    `max(resource_end, ready_time)`. Ties go to the resource seen first.
//! 3. Schedule the task at that start and advance the resource's end time.
//!
//! `ready_time` is the latest end of the task's dependencies under
//! [`DependencyMode::Enforce`], and 0 otherwise, in which case the rule is
//! plain least-loaded list scheduling.
//!
//! # Complexity
//! O(n * r) where n=tasks, r=resources.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use tracing::debug;

use crate::config::DependencyMode;
use crate::error::OptimizeError;
use crate::models::{ResourcePool, Schedule, ScheduleEntry, Task};
use crate::ordering::order_tasks;
use crate::validation::check_total_duration;

/// Greedy list scheduler over interchangeable resources.
///
/// # Example
///
/// ```
/// use task_optimizer::models::Task;
/// use task_optimizer::scheduler::GreedyAllocator;
///
/// let tasks = vec![
///     Task::new(1).with_duration(3),
///     Task::new(2).with_duration(2).with_priority(5),
/// ];
/// let schedule = GreedyAllocator::new().schedule(&tasks, &["A", "B"]).unwrap();
///
/// assert_eq!(schedule.get(2).unwrap().team, "A");
/// assert_eq!(schedule.get(1).unwrap().team, "B");
/// assert_eq!(schedule.makespan(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator {
    dependency_mode: DependencyMode,
}

impl GreedyAllocator {
    /// Creates an allocator that ignores dependencies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dependency mode.
    pub fn with_dependency_mode(mut self, mode: DependencyMode) -> Self {
        self.dependency_mode = mode;
        self
    }

    /// Orders and allocates tasks in one step.
    ///
    /// # Errors
    /// - [`OptimizeError::Input`] if `resources` is empty or has duplicates.
    /// - [`OptimizeError::Validation`] if the durations overflow, or on a
    ///   dependency cycle (enforce mode).
    pub fn schedule<S: AsRef<str>>(
        &self,
        tasks: &[Task],
        resources: &[S],
    ) -> Result<Schedule, OptimizeError> {
        let pool = ResourcePool::new(resources)?;
        check_total_duration(tasks)?;
        let order = order_tasks(tasks, self.dependency_mode)?;
        Ok(self.allocate(tasks, &order, &pool))
    }

    /// Allocates tasks in the given order.
    ///
    /// `order` holds indices into `tasks`; each index must appear once.
    /// The summed durations must fit in an `i64`, as checked by
    /// [`check_total_duration`].
    pub fn allocate(&self, tasks: &[Task], order: &[usize], pool: &ResourcePool) -> Schedule {
        let mut schedule = Schedule::new();
        let mut resource_end: Vec<i64> = vec![0; pool.len()];

        for &task_idx in order {
            let task = &tasks[task_idx];
            let ready = self.ready_time(task, &schedule);

            let mut best = 0;
            let mut best_start = i64::MAX;
            for (slot, &end) in resource_end.iter().enumerate() {
                let start = end.max(ready);
                if start < best_start {
                    best_start = start;
                    best = slot;
                }
            }

            let team = &pool.names()[best];
            let entry = ScheduleEntry::new(team.as_str(), best_start, task.duration);
            debug!(
                task_id = task.id,
                team = %team,
                start = entry.start,
                end = entry.end,
                "assigned task"
            );

            resource_end[best] = entry.end;
            schedule.insert(task.id, entry);
        }

        schedule
    }

    /// Earliest start allowed by the task's dependencies.
    fn ready_time(&self, task: &Task, schedule: &Schedule) -> i64 {
        match self.dependency_mode {
            DependencyMode::Enforce if task.has_dependencies() => task
                .depends_on
                .iter()
                .filter_map(|dep| schedule.get(*dep))
                .map(|e| e.end)
                .max()
                .unwrap_or(0),
            _ => 0,
        }
    }
}
