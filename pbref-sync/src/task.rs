//! Task spawning abstraction for single-threaded executors.

use std::future::Future;

/// Provider for spawning local tasks.
///
/// [`join`](crate::join) runs every joined operation in its own task so that
/// each one is observed to completion, even after the barrier has resolved.
pub trait TaskProvider: Clone {
    /// Spawn a named task on the current thread.
    fn spawn_task<F>(&self, name: &str, future: F) -> tokio::task::JoinHandle<()>
    where
        F: Future<Output = ()> + 'static;
}

/// Tokio task provider using `spawn_local`.
///
/// Must be used from within a [`tokio::task::LocalSet`].
#[derive(Clone, Debug, Default)]
pub struct TokioTaskProvider;

impl TaskProvider for TokioTaskProvider {
    fn spawn_task<F>(&self, name: &str, future: F) -> tokio::task::JoinHandle<()>
    where
        F: Future<Output = ()> + 'static,
    {
        let task_name = name.to_string();
        tokio::task::spawn_local(async move {
            tracing::trace!("Task {} starting", task_name);
            future.await;
            tracing::trace!("Task {} completed", task_name);
        })
    }
}
