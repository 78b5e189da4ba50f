//! Greedy allocation and schedule metrics.
//!
//! # Algorithm
//!
//! `GreedyAllocator` walks tasks in dispatch order and places each one on
//! the resource that can start it earliest. It never backtracks, so the
//! makespan is not guaranteed optimal.
//!
//! # Metrics
//!
//! `compute_metrics` derives makespan, task totals, utilization and
//! processing time from a finished schedule.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4-5

mod greedy;
pub mod metrics;

pub use greedy::GreedyAllocator;
pub use metrics::{compute_metrics, MetricsOptions};
