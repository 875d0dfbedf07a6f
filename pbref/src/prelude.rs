//! Common imports for working with FURLs and barriers.

pub use pbref_core::{
    ConnectionHint, FurlError, FurlErrorKind, FurlParser, HintKind, ParserConfig, SturdyRef,
    TubId, TubRef, parse_furl,
};
pub use pbref_sync::{
    AsyncAnd, BarrierError, Completion, TaskProvider, TokioTaskProvider, TracingReporter,
    UnobservedFailure, UnobservedFailureReporter, join,
};

// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;

/// Result of parsing a FURL.
pub type Result<T> = std::result::Result<T, FurlError>;
