//! # pbref-sync
//!
//! Coordination primitives used by the layers that dial and serve
//! [`SturdyRef`](https://docs.rs/pbref-core)s.
//!
//! This crate provides:
//! - **AsyncAnd**: an n-ary join that resolves when all operations succeed,
//!   or with the first failure
//! - **Unobserved-failure reporting**: an injectable sink for failures that
//!   arrive after the barrier resolved
//! - **Task provider**: task spawning for single-threaded executors

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod barrier;
pub mod report;
pub mod task;

// Barrier exports
pub use barrier::{AsyncAnd, BarrierError, Completion, join};

// Reporting exports
pub use report::{CollectingReporter, TracingReporter, UnobservedFailure, UnobservedFailureReporter};

// Task exports
pub use task::{TaskProvider, TokioTaskProvider};
