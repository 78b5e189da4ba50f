//! Greedy task-to-team scheduling.
//!
//! Assigns independent tasks to a pool of interchangeable resources so as
//! to keep the makespan low, then reports utilization and timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RawTask`, `Task`, `ResourcePool`,
//!   `Schedule`, `ScheduleEntry`, `Metrics`, `Constraints`
//! - **`validation`**: Task building (defaults, duplicate IDs, dependency checks)
//! - **`ordering`**: Priority-first and dependency-aware task orders
//! - **`scheduler`**: Greedy earliest-available allocation and metrics
//! - **`optimizer`**: The end-to-end pipeline and its cached wrapper
//!
//! # Pipeline
//!
//! raw tasks → validated tasks → ordered indices → schedule → metrics
//!
//! The heuristic is greedy list scheduling: it does not search, backtrack
//! or guarantee an optimal makespan.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod ordering;
pub mod scheduler;
pub mod validation;

pub use config::{DependencyMode, OptimizerConfig};
pub use error::{InputError, OptimizeError};
pub use models::{Constraints, Metrics, RawTask, Schedule, ScheduleEntry, Task, TaskId};
pub use optimizer::{CachedOptimizer, OptimizationResult, Optimizer};
pub use validation::{ValidationError, ValidationErrorKind};
