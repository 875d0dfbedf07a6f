//! AsyncAND barrier: wait for N independent operations, fail on the first
//! failure.
//!
//! - [`AsyncAnd`]: the future the consumer awaits
//! - [`Completion`]: one single-use result handle per operation
//! - [`join`]: spawn a set of futures and join them
//! - [`BarrierError`]: what the consumer gets when the join does not succeed
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pbref_sync::{AsyncAnd, BarrierError, CollectingReporter};
//!
//! let reporter = Arc::new(CollectingReporter::<&str>::new());
//! let (barrier, completions) = AsyncAnd::<&str>::with_reporter(2, reporter.clone());
//! let mut completions = completions.into_iter();
//!
//! completions.next().unwrap().fail("first");
//! completions.next().unwrap().fail("second");
//!
//! // Only the first failure reaches the barrier's consumer.
//! assert!(barrier.is_terminal());
//! assert_eq!(reporter.take()[0].error, BarrierError::Failed("second"));
//! ```

mod async_and;
mod completion;
mod error;
mod join;

pub use async_and::AsyncAnd;
pub use completion::Completion;
pub use error::BarrierError;
pub use join::join;
