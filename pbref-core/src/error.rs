//! Error types for FURL parsing.
//!
//! Two classes of failure exist, and callers are expected to tell them apart:
//!
//! - [`FurlError::Prefix`]: the text is not shaped like a FURL at all (wrong
//!   scheme, no `/` before the name, no `@` in the authority).
//! - [`FurlError::BadAddress`]: the text is a FURL, but its TubID or one of its
//!   connection hints is malformed.
//!
//! The diagnostic strings are part of the observable contract and are matched
//! literally by callers and tests.

use thiserror::Error;

/// Errors that can occur while parsing a FURL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FurlError {
    /// The input does not look like a FURL.
    ///
    /// Raised for a missing `pb://` prefix, a missing `/` name separator, an
    /// empty name, and a missing `@` authority separator.
    #[error("unknown FURL prefix in '{furl}'")]
    Prefix {
        /// The complete input that was rejected.
        furl: String,
    },

    /// A structural problem inside a well-prefixed FURL.
    #[error("{message}")]
    BadAddress {
        /// Human-readable diagnostic, including the offending substring.
        message: String,
    },
}

/// Coarse classification of a [`FurlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurlErrorKind {
    /// See [`FurlError::Prefix`].
    Prefix,
    /// See [`FurlError::BadAddress`].
    BadAddress,
}

impl FurlError {
    pub(crate) fn prefix(furl: &str) -> Self {
        FurlError::Prefix {
            furl: furl.to_string(),
        }
    }

    pub(crate) fn bad_hint_no_port(token: &str) -> Self {
        FurlError::BadAddress {
            message: format!("bad connection hint '{}' (hostname, but no port)", token),
        }
    }

    pub(crate) fn bad_hint_ip_scheme(token: &str) -> Self {
        FurlError::BadAddress {
            message: format!(
                "bad connection hint '{}' (specifies ipv[46]:, but doesn't contain an ipv[46] hint)",
                token
            ),
        }
    }

    pub(crate) fn bad_tub_id(text: &str, expected_len: usize) -> Self {
        FurlError::BadAddress {
            message: format!(
                "invalid TubID '{}' (expected {} lowercase base32 characters)",
                text, expected_len
            ),
        }
    }

    pub(crate) fn bad_tub_id_alphabet(text: &str) -> Self {
        FurlError::BadAddress {
            message: format!("invalid TubID '{}' (expected lowercase base32 characters)", text),
        }
    }

    /// The class of this error.
    pub fn kind(&self) -> FurlErrorKind {
        match self {
            FurlError::Prefix { .. } => FurlErrorKind::Prefix,
            FurlError::BadAddress { .. } => FurlErrorKind::BadAddress,
        }
    }
}

/// Result type for FURL parsing.
pub type FurlResult<T> = Result<T, FurlError>;
