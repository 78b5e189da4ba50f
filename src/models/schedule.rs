//! Schedule (solution) model.
//!
//! A schedule maps every task id to the resource and time interval the
//! allocator chose for it. Intervals are half-open: `[start, end)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TaskId;

/// A single task-resource-time assignment.
///
/// # Invariants
/// - `end == start + duration`
/// - `start >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Assigned resource name.
    pub team: String,
    /// Start time.
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
    /// Processing time.
    pub duration: i64,
}

impl ScheduleEntry {
    /// Creates an entry starting at `start` and running for `duration`.
    ///
    /// `start + duration` must fit in an `i64`.
    pub fn new(team: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            team: team.into(),
            start,
            end: start + duration,
            duration,
        }
    }

    /// Whether `[start, end)` intersects the other entry's interval.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A complete schedule: one entry per task, keyed by task id.
///
/// Serializes as a map `{task_id: {team, start, end, duration}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<TaskId, ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the entry for a task, returning any entry it replaced.
    pub fn insert(&mut self, task_id: TaskId, entry: ScheduleEntry) -> Option<ScheduleEntry> {
        self.entries.insert(task_id, entry)
    }

    /// Entry for a task.
    pub fn get(&self, task_id: TaskId) -> Option<&ScheduleEntry> {
        self.entries.get(&task_id)
    }

    /// Iterates entries in ascending task id order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &ScheduleEntry)> {
        self.entries.iter().map(|(&id, e)| (id, e))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makespan: latest end time across all entries (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.values().map(|e| e.end).max().unwrap_or(0)
    }

    /// Sum of all entry durations.
    ///
    /// Does not overflow for schedules built by the allocator, whose inputs
    /// pass [`crate::validation::check_total_duration`].
    pub fn total_duration(&self) -> i64 {
        self.entries.values().map(|e| e.duration).sum()
    }

    /// Entries assigned to a resource, ordered by start time.
    pub fn entries_for_resource(&self, team: &str) -> Vec<(TaskId, &ScheduleEntry)> {
        let mut entries: Vec<_> = self.iter().filter(|(_, e)| e.team == team).collect();
        entries.sort_by_key(|(_, e)| e.start);
        entries
    }
}
