//! AsyncAnd: consumer side of the barrier.
//!
//! The barrier state is shared between the consumer future ([`AsyncAnd`]) and
//! one [`Completion`] per joined operation. Every transition happens under a
//! single mutex, so concurrent completions agree on exactly one terminal
//! outcome.
//!
//! ```text
//!            last success             consumer polls
//! Pending ──────────────────► Succeeded ────────────┐
//!    │                                              ▼
//!    │  first failure or abandon                Delivered
//!    └──────────────────────► Failed(e) ────────────┘
//! ```
//!
//! Once the outcome leaves `Pending`, later failures and abandoned operations
//! go to the reporter.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};

use crate::report::{TracingReporter, UnobservedFailure, UnobservedFailureReporter};

use super::completion::Completion;
use super::error::BarrierError;

/// Terminal state of a barrier, or lack thereof.
enum Outcome<E> {
    Pending,
    Succeeded,
    Failed(UnobservedFailure<E>),
    /// The outcome has been handed out; nothing will be delivered again.
    Delivered,
}

struct BarrierState<E> {
    /// Operations that have not completed yet, whatever the outcome.
    remaining: usize,
    outcome: Outcome<E>,
    waker: Option<Waker>,
    consumer_dropped: bool,
}

/// State shared between an [`AsyncAnd`] and its [`Completion`]s.
pub(crate) struct Shared<E> {
    state: Mutex<BarrierState<E>>,
    reporter: Arc<dyn UnobservedFailureReporter<E>>,
}

impl<E> Shared<E> {
    fn lock(&self) -> MutexGuard<'_, BarrierState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Account for one finished operation.
    pub(crate) fn complete(&self, index: usize, result: Result<(), E>) {
        self.settle(index, result.map_err(BarrierError::Failed));
    }

    /// Account for an operation whose completion was dropped unused.
    pub(crate) fn abandon(&self, index: usize) {
        self.settle(index, Err(BarrierError::Abandoned { index }));
    }

    fn settle(&self, index: usize, result: Result<(), BarrierError<E>>) {
        let mut wake = None;
        let mut unobserved = None;
        {
            let mut state = self.lock();
            state.remaining = state.remaining.saturating_sub(1);
            let pending = matches!(state.outcome, Outcome::Pending);

            match result {
                Ok(()) => {
                    if pending && state.remaining == 0 {
                        tracing::trace!(operation = index, "barrier succeeded");
                        state.outcome = Outcome::Succeeded;
                        wake = state.waker.take();
                    }
                }
                Err(error) => {
                    let failure = UnobservedFailure { index, error };
                    if pending && !state.consumer_dropped {
                        tracing::trace!(operation = index, "barrier failed");
                        state.outcome = Outcome::Failed(failure);
                        wake = state.waker.take();
                    } else {
                        if pending {
                            state.outcome = Outcome::Delivered;
                        }
                        unobserved = Some(failure);
                    }
                }
            }
        }

        if let Some(waker) = wake {
            waker.wake();
        }
        if let Some(failure) = unobserved {
            self.reporter.report(failure);
        }
    }
}

/// Future that resolves once every joined operation succeeds, or as soon as
/// one of them fails.
///
/// Resolves to `Ok(())` on success and to the first failure otherwise. An
/// operation that drops its [`Completion`] without a result counts as a
/// failure ([`BarrierError::Abandoned`]). Failures after that point are
/// passed to the barrier's [`UnobservedFailureReporter`], never to this
/// future.
///
/// # Examples
///
/// ```
/// use pbref_sync::AsyncAnd;
///
/// let (barrier, completions) = AsyncAnd::<String>::new(2);
/// let mut completions = completions.into_iter();
/// completions.next().unwrap().succeed();
/// assert_eq!(barrier.remaining(), 1);
/// completions.next().unwrap().succeed();
/// assert!(barrier.is_terminal());
/// ```
pub struct AsyncAnd<E> {
    shared: Arc<Shared<E>>,
}

impl<E: std::fmt::Display + 'static> AsyncAnd<E> {
    /// Create a barrier over `count` operations that logs unobserved
    /// failures through [`TracingReporter`].
    pub fn new(count: usize) -> (Self, Vec<Completion<E>>) {
        Self::with_reporter(count, Arc::new(TracingReporter))
    }
}

impl<E> AsyncAnd<E> {
    /// Create a barrier over `count` operations.
    ///
    /// Returns the consumer future and one [`Completion`] per operation, in
    /// index order. With `count == 0` the barrier is already resolved.
    pub fn with_reporter(
        count: usize,
        reporter: Arc<dyn UnobservedFailureReporter<E>>,
    ) -> (Self, Vec<Completion<E>>) {
        let outcome = if count == 0 {
            Outcome::Succeeded
        } else {
            Outcome::Pending
        };
        let shared = Arc::new(Shared {
            state: Mutex::new(BarrierState {
                remaining: count,
                outcome,
                waker: None,
                consumer_dropped: false,
            }),
            reporter,
        });

        let completions = (0..count)
            .map(|index| Completion::new(index, shared.clone()))
            .collect();
        (Self { shared }, completions)
    }

    /// Operations that have not reported a result yet.
    pub fn remaining(&self) -> usize {
        self.shared.lock().remaining
    }

    /// True once the barrier has a final outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.shared.lock().outcome, Outcome::Pending)
    }
}

impl<E> Future for AsyncAnd<E> {
    type Output = Result<(), BarrierError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.shared.lock();
        match std::mem::replace(&mut state.outcome, Outcome::Delivered) {
            Outcome::Pending => {
                state.outcome = Outcome::Pending;
                let registered =
                    matches!(&state.waker, Some(waker) if waker.will_wake(cx.waker()));
                if !registered {
                    state.waker = Some(cx.waker().clone());
                }
                Poll::Pending
            }
            Outcome::Succeeded => Poll::Ready(Ok(())),
            Outcome::Failed(failure) => Poll::Ready(Err(failure.error)),
            // Never re-fires.
            Outcome::Delivered => Poll::Pending,
        }
    }
}

impl<E> Drop for AsyncAnd<E> {
    fn drop(&mut self) {
        let orphan = {
            let mut state = self.shared.lock();
            state.consumer_dropped = true;
            state.waker = None;
            match std::mem::replace(&mut state.outcome, Outcome::Delivered) {
                Outcome::Failed(failure) => Some(failure),
                other => {
                    state.outcome = other;
                    None
                }
            }
        };

        if let Some(failure) = orphan {
            tracing::debug!(
                operation = failure.index,
                "barrier dropped before its failure was observed"
            );
            self.shared.reporter.report(failure);
        }
    }
}
