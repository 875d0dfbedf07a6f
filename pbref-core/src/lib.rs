//! # pbref-core
//!
//! FURL addressing for capability-secure remote references.
//!
//! A FURL names a remote endpoint (by its TubID), lists where that endpoint
//! may be reached (connection hints), and names one object hosted there:
//!
//! ```text
//! pb://q5l37rle6pojjnllrwjyryulavpqdlq5@127.0.0.1:9900,ipv6:[::1]:9900/name
//!      └────────────── TubID ─────────┘ └────────── hints ───────────┘ └name┘
//! ```
//!
//! ## Core Types
//!
//! - [`SturdyRef`]: the parsed, immutable, comparable reference
//! - [`TubRef`]: the endpoint half of a reference
//! - [`TubId`]: validated endpoint identifier
//! - [`ConnectionHint`]: recognized IPv4/IPv6 location
//!
//! ## Parsing
//!
//! - [`parse_furl`] / [`FurlParser`]: whole-FURL parsing
//! - [`parse_hint`]: single-token hint classification
//! - [`ParserConfig`]: parser configuration
//!
//! Parse errors are [`FurlError`] values; see its docs for the two classes.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod config;
mod error;
mod furl;
mod hint;
mod sturdy_ref;
mod tub_id;

// Config exports
pub use config::{DEFAULT_TUB_ID_LENGTH, ParserConfig};

// Error exports
pub use error::{FurlError, FurlErrorKind, FurlResult};

// Parser exports
pub use furl::{FURL_PREFIX, FurlParser, parse_furl};
pub use hint::{ConnectionHint, HintKind, HintResult, parse_hint};

// Value exports
pub use sturdy_ref::{SturdyRef, TubRef};
pub use tub_id::TubId;
