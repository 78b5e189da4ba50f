//! Task building and input validation.
//!
//! Normalizes [`RawTask`] descriptors into [`Task`] records, filling
//! defaults and collecting every problem found rather than stopping at the
//! first. Detects:
//! - Empty task lists
//! - Missing or duplicate IDs
//! - Non-positive durations
//! - Total duration exceeding the time axis
//! - Unknown or self-referencing dependencies (only when dependencies are
//!   enforced; cycles surface when the tasks are ordered)

use std::collections::HashSet;

use thiserror::Error;

use crate::config::DependencyMode;
use crate::models::{RawTask, Task, TaskId, DEFAULT_DURATION, DEFAULT_PRIORITY};

/// Validation result.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No task descriptors were supplied.
    EmptyTaskList,
    /// A descriptor has no `id`.
    MissingId,
    /// Two tasks share the same ID.
    DuplicateId,
    /// A duration is zero or negative.
    NonPositiveDuration,
    /// The durations sum past `i64::MAX`.
    DurationOverflow,
    /// A task depends on an ID that is not in the task list.
    UnknownDependency,
    /// A task lists itself as a dependency.
    SelfDependency,
    /// The dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Builds validated tasks from raw descriptors, preserving input order.
///
/// Missing fields default to duration 1, priority 1 and no dependencies.
/// Dependency references are only checked under
/// [`DependencyMode::Enforce`].
///
/// # Returns
/// The tasks if all checks pass, `Err(errors)` with all detected issues.
pub fn build_tasks(raw: &[RawTask], mode: DependencyMode) -> ValidationResult<Vec<Task>> {
    if raw.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyTaskList,
            "at least one task is required",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::with_capacity(raw.len());
    let mut tasks = Vec::with_capacity(raw.len());

    for (index, descriptor) in raw.iter().enumerate() {
        let Some(id) = descriptor.id else {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("task at index {index} has no id"),
            ));
            continue;
        };

        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate task id: {id}"),
            ));
        }

        let duration = descriptor.duration.unwrap_or(DEFAULT_DURATION);
        if duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("task {id} has non-positive duration {duration}"),
            ));
        }

        tasks.push(Task {
            id,
            duration,
            priority: descriptor.priority.unwrap_or(DEFAULT_PRIORITY),
            depends_on: descriptor.depends_on.clone().unwrap_or_default(),
        });
    }

    if errors.is_empty() {
        if let Err(e) = check_total_duration(&tasks) {
            errors.push(e);
        }
    }

    if mode == DependencyMode::Enforce && errors.is_empty() {
        errors.extend(check_dependencies(&tasks));
    }

    if errors.is_empty() {
        Ok(tasks)
    } else {
        Err(errors)
    }
}

/// Sums task durations, failing if the total does not fit in an `i64`.
///
/// Every start time the allocator produces is 0 or the end of an earlier
/// task, so no end time exceeds this total.
pub fn check_total_duration(tasks: &[Task]) -> Result<i64, ValidationError> {
    tasks
        .iter()
        .try_fold(0i64, |acc, t| acc.checked_add(t.duration))
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::DurationOverflow,
                format!("total duration of {} tasks overflows", tasks.len()),
            )
        })
}

/// Checks that every dependency names another task in the list.
///
/// Assumes task ids are unique. Cycles are reported by
/// [`crate::ordering::dependency_order`].
pub fn check_dependencies(tasks: &[Task]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let ids: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();

    for task in tasks {
        for &dep in &task.depends_on {
            if dep == task.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("task {} depends on itself", task.id),
                ));
            } else if !ids.contains(&dep) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("task {} depends on unknown task {dep}", task.id),
                ));
            }
        }
    }

    errors
}
