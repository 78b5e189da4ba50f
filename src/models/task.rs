//! Task model.
//!
//! A task is a single, indivisible unit of work with a duration and a
//! priority. Tasks are built from [`RawTask`] descriptors supplied by the
//! request layer and are immutable once validated.

use serde::{Deserialize, Serialize};

/// Task identifier.
pub type TaskId = i64;

/// Default duration (time units) for descriptors that omit it.
pub const DEFAULT_DURATION: i64 = 1;

/// Default priority for descriptors that omit it.
pub const DEFAULT_PRIORITY: i64 = 1;

/// Unvalidated task descriptor as received from the request layer.
///
/// Every field is optional so that a missing `id` surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTask {
    pub id: Option<TaskId>,
    pub duration: Option<i64>,
    pub priority: Option<i64>,
    pub depends_on: Option<Vec<TaskId>>,
}

impl RawTask {
    /// Creates a descriptor carrying only an id.
    pub fn new(id: TaskId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the dependency list.
    pub fn with_depends_on(mut self, depends_on: Vec<TaskId>) -> Self {
        self.depends_on = Some(depends_on);
        self
    }
}

/// A validated task.
///
/// # Invariants
/// - `duration > 0`
/// - `id` is unique within one optimization call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Processing time in abstract time units.
    pub duration: i64,
    /// Scheduling priority (higher = more urgent).
    pub priority: i64,
    /// Ids of tasks this one logically depends on.
    ///
    /// Only consulted when dependency enforcement is enabled.
    pub depends_on: Vec<TaskId>,
}

impl Task {
    /// Creates a task with default duration and priority.
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            duration: DEFAULT_DURATION,
            priority: DEFAULT_PRIORITY,
            depends_on: Vec::new(),
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a dependency.
    pub fn with_dependency(mut self, id: TaskId) -> Self {
        self.depends_on.push(id);
        self
    }

    /// Whether this task declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }
}
