//! Error type delivered by an [`AsyncAnd`](super::AsyncAnd).

use thiserror::Error;

/// Why a barrier, or one of its operations, did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarrierError<E> {
    /// An operation reported this failure.
    #[error("{0}")]
    Failed(E),

    /// An operation went away without reporting a result.
    ///
    /// This happens when its [`Completion`](super::Completion) is dropped
    /// unused, for instance because the task running the operation panicked.
    #[error("operation #{index} was abandoned before reporting a result")]
    Abandoned {
        /// Position of the abandoned operation in the joined set.
        index: usize,
    },
}

impl<E> BarrierError<E> {
    /// The failure reported by the operation, if it reported one.
    pub fn into_failure(self) -> Option<E> {
        match self {
            BarrierError::Failed(error) => Some(error),
            BarrierError::Abandoned { .. } => None,
        }
    }

    /// True if the operation never reported a result.
    pub fn is_abandoned(&self) -> bool {
        matches!(self, BarrierError::Abandoned { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_displays_inner_error() {
        let err = BarrierError::Failed("listener refused to stop");
        assert_eq!(err.to_string(), "listener refused to stop");
        assert!(!err.is_abandoned());
        assert_eq!(err.into_failure(), Some("listener refused to stop"));
    }

    #[test]
    fn test_abandoned_display() {
        let err = BarrierError::<String>::Abandoned { index: 3 };
        assert_eq!(
            err.to_string(),
            "operation #3 was abandoned before reporting a result"
        );
        assert!(err.is_abandoned());
        assert_eq!(err.into_failure(), None);
    }
}
