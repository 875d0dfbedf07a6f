//! SturdyRef: a parsed FURL.
//!
//! A [`SturdyRef`] names one object (`name`) hosted by one endpoint
//! (`tub_id`), and carries the connection hints that say where that endpoint
//! may be reached. The original FURL text is kept verbatim: hint tokens this
//! parser does not understand, and TubID extensions, survive a parse and
//! re-emit unchanged.
//!
//! Identity is the pair (`tub_id`, `name`). Two references to the same object
//! are equal even when they advertise different hints.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::{FurlError, FurlResult};
use crate::furl::{FURL_PREFIX, parse_furl, parse_stored};
use crate::hint::{ConnectionHint, HintResult, parse_hint};
use crate::tub_id::TubId;

/// Immutable, comparable reference to a remote object.
///
/// # Examples
///
/// ```
/// use pbref_core::SturdyRef;
///
/// let furl = "pb://q5l37rle6pojjnllrwjyryulavpqdlq5@127.0.0.1:9900,udp:127.0.0.1:7700/name";
/// let sr = SturdyRef::parse(furl).unwrap();
///
/// assert_eq!(sr.name(), "name");
/// assert_eq!(sr.hints().len(), 1);
/// assert_eq!(sr.canonical_text(), furl);
/// ```
#[derive(Debug, Clone)]
pub struct SturdyRef {
    tub_id: TubId,
    hints: Vec<ConnectionHint>,
    name: String,
    original: String,
}

impl SturdyRef {
    pub(crate) fn from_parsed(
        tub_id: TubId,
        hints: Vec<ConnectionHint>,
        name: String,
        original: String,
    ) -> Self {
        Self {
            tub_id,
            hints,
            name,
            original,
        }
    }

    /// Parse a FURL with the default parser configuration.
    ///
    /// # Errors
    ///
    /// See [`parse_furl`].
    pub fn parse(furl: &str) -> FurlResult<Self> {
        parse_furl(furl)
    }

    /// Build a reference from structured parts.
    ///
    /// Hints are written in their explicit form (`ipv4:host:port`,
    /// `ipv6:[host]:port`); an empty hint list produces an unrouteable FURL.
    ///
    /// # Errors
    ///
    /// Returns [`FurlError::BadAddress`] if the name is empty or contains `/`,
    /// or if a hint cannot be written so that it parses back to itself.
    pub fn from_parts(
        tub_id: TubId,
        hints: Vec<ConnectionHint>,
        name: impl Into<String>,
    ) -> FurlResult<Self> {
        let name = name.into();
        if name.is_empty() || name.contains('/') {
            return Err(FurlError::BadAddress {
                message: format!("invalid object name '{}'", name),
            });
        }

        let mut tokens = Vec::with_capacity(hints.len());
        for hint in &hints {
            let token = hint.to_string();
            let round_trips = !token.contains([',', '/'])
                && parse_hint(&token) == HintResult::Recognized(hint.clone());
            if !round_trips {
                return Err(FurlError::BadAddress {
                    message: format!("connection hint '{}' cannot be written into a FURL", token),
                });
            }
            tokens.push(token);
        }

        let original = format!("{}{}@{}/{}", FURL_PREFIX, tub_id, tokens.join(","), name);
        Ok(Self {
            tub_id,
            hints,
            name,
            original,
        })
    }

    /// Endpoint identifier.
    pub fn tub_id(&self) -> &TubId {
        &self.tub_id
    }

    /// Recognized connection hints, in the order they appear in the text.
    pub fn hints(&self) -> &[ConnectionHint] {
        &self.hints
    }

    /// Object name (swiss number) at the endpoint.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The FURL text this reference was built from, byte for byte.
    pub fn canonical_text(&self) -> &str {
        &self.original
    }

    /// True when no usable connection hint is known.
    pub fn is_unrouteable(&self) -> bool {
        self.hints.is_empty()
    }

    /// The endpoint half of this reference.
    pub fn tub_ref(&self) -> TubRef {
        TubRef {
            tub_id: self.tub_id.clone(),
            hints: self.hints.clone(),
        }
    }
}

impl PartialEq for SturdyRef {
    fn eq(&self, other: &Self) -> bool {
        self.tub_id == other.tub_id && self.name == other.name
    }
}

impl Eq for SturdyRef {}

impl Hash for SturdyRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tub_id.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for SturdyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for SturdyRef {
    type Err = FurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_furl(s)
    }
}

impl Serialize for SturdyRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.original)
    }
}

impl<'de> Deserialize<'de> for SturdyRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_stored(&text).map_err(de::Error::custom)
    }
}

/// The endpoint named by a [`SturdyRef`]: TubID plus where to find it.
///
/// Identity is the TubID alone.
#[derive(Debug, Clone)]
pub struct TubRef {
    tub_id: TubId,
    hints: Vec<ConnectionHint>,
}

impl TubRef {
    /// Endpoint identifier.
    pub fn tub_id(&self) -> &TubId {
        &self.tub_id
    }

    /// Recognized connection hints.
    pub fn hints(&self) -> &[ConnectionHint] {
        &self.hints
    }
}

impl PartialEq for TubRef {
    fn eq(&self, other: &Self) -> bool {
        self.tub_id == other.tub_id
    }
}

impl Eq for TubRef {}

impl Hash for TubRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tub_id.hash(state);
    }
}

impl fmt::Display for TubRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<TubRef {}>", self.tub_id)
    }
}
