//! Task ordering for allocation.
//!
//! Produces a permutation of task indices. The default order is a stable
//! sort on (priority descending, duration ascending); ties keep input
//! order. When dependencies are enforced, a topological order is produced
//! whose ready set is drained by the same key.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::config::DependencyMode;
use crate::models::{Task, TaskId};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Dispatch key: smaller sorts first.
type OrderKey = (Reverse<i64>, i64, usize);

#[inline]
fn order_key(tasks: &[Task], idx: usize) -> OrderKey {
    (Reverse(tasks[idx].priority), tasks[idx].duration, idx)
}

/// Returns task indices in allocation order for the given mode.
///
/// # Errors
/// Only [`DependencyMode::Enforce`] can fail, with
/// [`ValidationErrorKind::CyclicDependency`].
pub fn order_tasks(tasks: &[Task], mode: DependencyMode) -> Result<Vec<usize>, ValidationError> {
    match mode {
        DependencyMode::Ignore => Ok(priority_order(tasks)),
        DependencyMode::Enforce => dependency_order(tasks),
    }
}

/// Priority-first order, ignoring dependencies.
///
/// Higher priority first, then shorter duration, then input position.
pub fn priority_order(tasks: &[Task]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    // sort_by_key is stable, so equal keys keep input order
    indices.sort_by_key(|&i| (Reverse(tasks[i].priority), tasks[i].duration));
    indices
}

/// Topological order with priority tie-breaking (Kahn's algorithm).
///
/// Among tasks whose dependencies have all been emitted, the one with the
/// smallest (priority desc, duration asc, input index) key goes next.
/// Dependency ids not present in `tasks` are ignored here; reference
/// checks belong to [`crate::validation`].
pub fn dependency_order(tasks: &[Task]) -> Result<Vec<usize>, ValidationError> {
    let index_of: HashMap<TaskId, usize> =
        tasks.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    let mut in_degree = vec![0usize; tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, task) in tasks.iter().enumerate() {
        for dep in &task.depends_on {
            if let Some(&d) = index_of.get(dep) {
                dependents[d].push(i);
                in_degree[i] += 1;
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<OrderKey>> = (0..tasks.len())
        .filter(|&i| in_degree[i] == 0)
        .map(|i| Reverse(order_key(tasks, i)))
        .collect();

    let mut order = Vec::with_capacity(tasks.len());
    while let Some(Reverse((_, _, idx))) = ready.pop() {
        order.push(idx);
        for &next in &dependents[idx] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(order_key(tasks, next)));
            }
        }
    }

    if order.len() < tasks.len() {
        let stuck: Vec<String> = (0..tasks.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| tasks[i].id.to_string())
            .collect();
        return Err(ValidationError::new(
            ValidationErrorKind::CyclicDependency,
            format!("circular dependency among tasks [{}]", stuck.join(", ")),
        ));
    }

    Ok(order)
}
