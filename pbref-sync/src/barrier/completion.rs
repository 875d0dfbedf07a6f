//! Completion: producer side of the barrier.
//!
//! Each joined operation owns one [`Completion`] and consumes it with its
//! result. Consuming by value means an operation is counted at most once;
//! dropping it unused counts the operation as abandoned, so a panicking
//! operation still settles the barrier.

use std::fmt;
use std::sync::Arc;

use super::async_and::Shared;

/// Single-use handle through which one operation reports its result.
///
/// If dropped without being used, the operation counts as a failure:
/// [`BarrierError::Abandoned`](super::BarrierError::Abandoned) when it is the
/// first one, an unobserved failure otherwise.
pub struct Completion<E> {
    index: usize,
    shared: Arc<Shared<E>>,
    used: bool,
}

impl<E> Completion<E> {
    pub(crate) fn new(index: usize, shared: Arc<Shared<E>>) -> Self {
        Self {
            index,
            shared,
            used: false,
        }
    }

    /// Position of this operation in the joined set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Report success.
    pub fn succeed(self) {
        self.complete(Ok::<(), E>(()));
    }

    /// Report failure.
    pub fn fail(self, error: E) {
        self.complete(Err::<(), E>(error));
    }

    /// Report the operation's result; a success value is discarded.
    pub fn complete<T>(mut self, result: Result<T, E>) {
        self.used = true;
        self.shared.complete(self.index, result.map(|_| ()));
    }
}

impl<E> fmt::Debug for Completion<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("index", &self.index)
            .field("used", &self.used)
            .finish()
    }
}

impl<E> Drop for Completion<E> {
    fn drop(&mut self) {
        if !self.used {
            tracing::warn!(
                operation = self.index,
                "barrier completion dropped without a result"
            );
            self.shared.abandon(self.index);
        }
    }
}
