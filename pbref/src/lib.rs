//! # pbref
//!
//! Addressing and coordination for capability-secure remote objects.
//!
//! A remote object is named by a FURL: the identity of the endpoint hosting
//! it (its TubID), where that endpoint may be reached (connection hints), and
//! an unguessable name for the object itself. Holding the FURL is holding
//! the capability.
//!
//! ## Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    pbref (this crate)                       │
//! │                 Re-exports + prelude                        │
//! ├──────────────────────────┬──────────────────────────────────┤
//! │  pbref-core              │       pbref-sync                 │
//! │  • TubId validation      │       • AsyncAnd barrier         │
//! │  • Connection hints      │       • Unobserved-failure sink  │
//! │  • FURL parser           │       • Task provider            │
//! │  • SturdyRef / TubRef    │                                  │
//! └──────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pbref::prelude::*;
//!
//! let sr: SturdyRef = "pb://q5l37rle6pojjnllrwjyryulavpqdlq5@127.0.0.1:9900/name"
//!     .parse()
//!     .unwrap();
//! assert_eq!(sr.hints()[0].port(), 9900);
//! ```
//!
//! ## Which Crate to Use
//!
//! | Use case | Crate |
//! |----------|-------|
//! | Everything (recommended) | `pbref` |
//! | FURL parsing only | `pbref-core` |
//! | Barrier only | `pbref-sync` |

#![deny(missing_docs)]

pub use pbref_core::*;
pub use pbref_sync::*;

pub mod prelude;
