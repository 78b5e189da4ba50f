//! Scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | [`RawTask`] | Unvalidated descriptor from the request layer |
//! | [`Task`] | Validated, immutable unit of work |
//! | [`ResourcePool`] | Ordered set of interchangeable teams |
//! | [`Schedule`] | Task id → [`ScheduleEntry`] |
//! | [`Metrics`] | Aggregate statistics of a schedule |
//! | [`Constraints`] | Opaque caller-supplied constraints |

mod constraints;
mod metrics;
mod resource;
mod schedule;
mod task;

pub use constraints::Constraints;
pub use metrics::{Metrics, ON_TIME_PLACEHOLDER};
pub use resource::ResourcePool;
pub use schedule::{Schedule, ScheduleEntry};
pub use task::{RawTask, Task, TaskId, DEFAULT_DURATION, DEFAULT_PRIORITY};
