//! Out-of-band reporting for failures nobody is waiting on.
//!
//! An [`AsyncAnd`](crate::AsyncAnd) delivers at most one failure to its
//! consumer. Every other failure (a second failure, an operation abandoned
//! after the barrier resolved, or a failure after the consumer went away) is
//! handed to an [`UnobservedFailureReporter`] instead, so it is never lost.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::barrier::BarrierError;

/// A failure that reached a barrier after it had already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unobserved failure from operation #{index}: {error}")]
pub struct UnobservedFailure<E> {
    /// Position of the failing operation in the joined set.
    pub index: usize,
    /// The failure itself.
    pub error: BarrierError<E>,
}

/// Sink for [`UnobservedFailure`]s.
///
/// Implementations must not block for long: they are called on whichever
/// task or thread completed the failing operation.
pub trait UnobservedFailureReporter<E>: Send + Sync {
    /// Record one unobserved failure.
    fn report(&self, failure: UnobservedFailure<E>);
}

/// Reporter that logs every failure at error level through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl<E: fmt::Display> UnobservedFailureReporter<E> for TracingReporter {
    fn report(&self, failure: UnobservedFailure<E>) {
        tracing::error!(
            operation = failure.index,
            error = %failure.error,
            "unobserved failure after barrier resolved"
        );
    }
}

/// Reporter that keeps failures in memory until drained.
#[derive(Debug)]
pub struct CollectingReporter<E> {
    failures: Mutex<Vec<UnobservedFailure<E>>>,
}

impl<E> Default for CollectingReporter<E> {
    fn default() -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
        }
    }
}

impl<E> CollectingReporter<E> {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every failure recorded so far.
    pub fn take(&self) -> Vec<UnobservedFailure<E>> {
        std::mem::take(&mut *self.failures.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of failures currently held.
    pub fn len(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no failure is currently held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Send> UnobservedFailureReporter<E> for CollectingReporter<E> {
    fn report(&self, failure: UnobservedFailure<E>) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }
}
