//! TubID: the identifier of the endpoint hosting a referenced object.
//!
//! A TubID is a digest of the endpoint's public key, written as a
//! fixed-length string over the lowercase base32 alphabet (`a`-`z`, `2`-`7`).
//! Two TubIDs are the same endpoint if and only if their text is identical.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::config::DEFAULT_TUB_ID_LENGTH;
use crate::error::{FurlError, FurlResult};

/// Validated endpoint identifier.
///
/// # Examples
///
/// ```
/// use pbref_core::TubId;
///
/// let tub = TubId::parse("q5l37rle6pojjnllrwjyryulavpqdlq5").unwrap();
/// assert_eq!(tub.as_str(), "q5l37rle6pojjnllrwjyryulavpqdlq5");
///
/// assert!(TubId::parse("badstuff").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TubId(String);

impl TubId {
    /// Validate `text` as a TubID of the default length.
    ///
    /// # Errors
    ///
    /// Returns [`FurlError::BadAddress`] naming `text` if it is not exactly
    /// 32 lowercase base32 characters.
    pub fn parse(text: &str) -> FurlResult<Self> {
        Self::parse_with_length(text, DEFAULT_TUB_ID_LENGTH)
    }

    /// Validate `text` as a TubID of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`FurlError::BadAddress`] naming `text` on any deviation.
    pub fn parse_with_length(text: &str, length: usize) -> FurlResult<Self> {
        if text.len() != length || !text.bytes().all(is_base32_lower) {
            return Err(FurlError::bad_tub_id(text, length));
        }
        Ok(Self(text.to_string()))
    }

    /// Validate `text` as a TubID of any non-zero length.
    ///
    /// Text written by [`Serialize`] is read back through here: the length
    /// was checked by whichever parser produced the value.
    pub(crate) fn from_stored(text: &str) -> FurlResult<Self> {
        if text.is_empty() || !text.bytes().all(is_base32_lower) {
            return Err(FurlError::bad_tub_id_alphabet(text));
        }
        Ok(Self(text.to_string()))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_base32_lower(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'2'..=b'7')
}

impl fmt::Display for TubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TubId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TubId {
    type Err = FurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TubId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TubId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        TubId::from_stored(&text).map_err(de::Error::custom)
    }
}
