//! `join`: run a set of operations and wait on all of them.

use std::future::Future;
use std::sync::Arc;

use crate::report::UnobservedFailureReporter;
use crate::task::TaskProvider;

use super::async_and::AsyncAnd;

/// Join already-created operations into one [`AsyncAnd`].
///
/// Each operation is spawned as its own task through `tasks` and keeps
/// running until it finishes, even after the returned barrier has resolved;
/// a late failure then goes to `reporter`. Nothing is cancelled.
///
/// An operation whose task panics, or is dropped before finishing, settles
/// as [`BarrierError::Abandoned`](super::BarrierError::Abandoned).
///
/// With an empty set the returned barrier is already resolved.
///
/// # Examples
///
/// ```rust,ignore
/// let local = tokio::task::LocalSet::new();
/// local.run_until(async {
///     let stops = listeners.iter().map(|l| l.stop());
///     join(stops, &TokioTaskProvider, Arc::new(TracingReporter)).await?;
/// }).await;
/// ```
pub fn join<I, F, T, E, P>(
    operations: I,
    tasks: &P,
    reporter: Arc<dyn UnobservedFailureReporter<E>>,
) -> AsyncAnd<E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + 'static,
    T: 'static,
    E: 'static,
    P: TaskProvider,
{
    let operations: Vec<F> = operations.into_iter().collect();
    let (barrier, completions) = AsyncAnd::with_reporter(operations.len(), reporter);
    tracing::trace!(operations = operations.len(), "joining operations");

    for (operation, completion) in operations.into_iter().zip(completions) {
        let name = format!("async_and_op_{}", completion.index());
        tasks.spawn_task(&name, async move {
            completion.complete(operation.await);
        });
    }
    barrier
}
