//! FURL parsing.
//!
//! ```text
//! pb://<tubid>[,<extension>]@<hint>[,<hint>...]/<name>
//! ```
//!
//! The authority (everything between `pb://` and the first `/`) is split at
//! its first `@`. The left side is the TubID, optionally followed by a
//! comma and an extension this parser ignores. The right side is the hint
//! section, classified token by token by [`parse_hint`]. An empty hint
//! section is valid and means the endpoint is unrouteable.

use crate::config::ParserConfig;
use crate::error::{FurlError, FurlResult};
use crate::hint::{HintResult, parse_hint};
use crate::sturdy_ref::SturdyRef;
use crate::tub_id::TubId;

/// Scheme prefix every FURL starts with.
pub const FURL_PREFIX: &str = "pb://";

/// FURL parser carrying a [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use pbref_core::{FurlParser, ParserConfig};
///
/// let parser = FurlParser::new(ParserConfig::default().with_tub_id_length(4));
/// let sr = parser.parse("pb://abcd@example.com:80/obj").unwrap();
/// assert_eq!(sr.tub_id().as_str(), "abcd");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FurlParser {
    config: ParserConfig,
}

impl FurlParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `furl` into a [`SturdyRef`].
    ///
    /// # Errors
    ///
    /// - [`FurlError::Prefix`] if `furl` does not start with `pb://`, has no
    ///   `/` before a non-empty name, or has no `@` in its authority.
    /// - [`FurlError::BadAddress`] if the TubID is invalid or a hint token is
    ///   fatally malformed. The first fatal hint wins.
    pub fn parse(&self, furl: &str) -> FurlResult<SturdyRef> {
        let length = self.config.tub_id_length;
        parse_with(furl, |text| TubId::parse_with_length(text, length))
    }
}

/// Parse FURL text previously written by this crate.
///
/// The TubID length is not checked again: the reference may come from a
/// parser configured with a non-default length.
pub(crate) fn parse_stored(furl: &str) -> FurlResult<SturdyRef> {
    parse_with(furl, TubId::from_stored)
}

fn parse_with<F>(furl: &str, tub_id: F) -> FurlResult<SturdyRef>
where
    F: FnOnce(&str) -> FurlResult<TubId>,
{
    let rest = furl
        .strip_prefix(FURL_PREFIX)
        .ok_or_else(|| FurlError::prefix(furl))?;
    let (authority, name) = rest.split_once('/').ok_or_else(|| FurlError::prefix(furl))?;
    if name.is_empty() || name.contains('/') {
        return Err(FurlError::prefix(furl));
    }
    // A missing '@' is a prefix error, not a hint error.
    let (id_part, hints_part) = authority
        .split_once('@')
        .ok_or_else(|| FurlError::prefix(furl))?;

    let tub_text = match id_part.split_once(',') {
        Some((tub_text, _extension)) => tub_text,
        None => id_part,
    };
    let tub_id = tub_id(tub_text)?;

    let mut hints = Vec::new();
    if !hints_part.is_empty() {
        for token in hints_part.split(',') {
            match parse_hint(token) {
                HintResult::Recognized(hint) => hints.push(hint),
                HintResult::Ignored => {}
                HintResult::Fatal(err) => return Err(err),
            }
        }
    }

    tracing::trace!(
        tub_id = %tub_id,
        hints = hints.len(),
        "parsed FURL"
    );
    Ok(SturdyRef::from_parsed(
        tub_id,
        hints,
        name.to_string(),
        furl.to_string(),
    ))
}

/// Parse `furl` with the default [`ParserConfig`].
///
/// # Errors
///
/// See [`FurlParser::parse`].
pub fn parse_furl(furl: &str) -> FurlResult<SturdyRef> {
    FurlParser::default().parse(furl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FurlErrorKind;
    use crate::hint::{ConnectionHint, HintKind};

    const TUB1: &str = "q5l37rle6pojjnllrwjyryulavpqdlq5";

    fn furl(rest: &str) -> String {
        format!("pb://{}{}", TUB1, rest)
    }

    #[test]
    fn test_parse_ipv4() {
        let sr = parse_furl(&furl("@127.0.0.1:9900/name")).expect("parse");
        assert_eq!(sr.tub_id().as_str(), TUB1);
        assert_eq!(
            sr.hints(),
            &[ConnectionHint::new(HintKind::Ipv4, "127.0.0.1", 9900)]
        );
        assert_eq!(sr.name(), "name");
    }

    #[test]
    fn test_parse_ipv6() {
        let sr = parse_furl(&furl("@ipv6:[::1]:9900/name")).expect("parse");
        assert_eq!(sr.hints(), &[ConnectionHint::new(HintKind::Ipv6, "::1", 9900)]);
    }

    #[test]
    fn test_tub_id_extension_is_ignored() {
        let sr = parse_furl(&furl(",otherstuff@127.0.0.1:9900/name")).expect("parse");
        assert_eq!(sr.tub_id().as_str(), TUB1);

        let err = parse_furl(&format!("pb://badstuff,{}@127.0.0.1:9900/name", TUB1))
            .expect_err("rejected");
        assert_eq!(err.kind(), FurlErrorKind::BadAddress);
        assert!(err.to_string().contains("'badstuff'"));
    }

    #[test]
    fn test_missing_prefix() {
        let err = parse_furl("http://example.com/name").expect_err("rejected");
        assert_eq!(
            err,
            FurlError::Prefix {
                furl: "http://example.com/name".to_string()
            }
        );
        assert!(parse_furl("").is_err());
        assert!(parse_furl("PB://x@y:1/z").is_err());
    }

    #[test]
    fn test_missing_at_is_prefix_error() {
        let err = parse_furl(&furl("/name")).expect_err("rejected");
        assert_eq!(err.kind(), FurlErrorKind::Prefix);
        assert!(err.to_string().contains("unknown FURL prefix in "));
    }

    #[test]
    fn test_missing_or_bad_name_is_prefix_error() {
        for input in [
            furl("@127.0.0.1:9900"),
            furl("@127.0.0.1:9900/"),
            furl("@127.0.0.1:9900/a/b"),
        ] {
            let err = parse_furl(&input).expect_err("rejected");
            assert_eq!(err.kind(), FurlErrorKind::Prefix, "input: {}", input);
        }
    }

    #[test]
    fn test_empty_hints_are_unrouteable() {
        let sr = parse_furl(&furl("@/name")).expect("parse");
        assert!(sr.hints().is_empty());
        assert!(sr.is_unrouteable());
    }

    #[test]
    fn test_first_fatal_hint_aborts() {
        let err = parse_furl(&furl("@127.0.0.1:1,example.com,ipv6:[x]/name"))
            .expect_err("rejected");
        assert_eq!(
            err.to_string(),
            "bad connection hint 'example.com' (hostname, but no port)"
        );
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    #[test]
    fn test_ignored_hints_do_not_abort() {
        init_tracing();
        let sr = parse_furl(&furl("@udp:1.2.3.4:5,127.0.0.1:0,10.0.0.1:80/name")).expect("parse");
        assert_eq!(
            sr.hints(),
            &[ConnectionHint::new(HintKind::Ipv4, "10.0.0.1", 80)]
        );
    }

    #[test]
    fn test_duplicate_hints_are_kept() {
        let sr = parse_furl(&furl("@127.0.0.1:9900,127.0.0.1:9900/name")).expect("parse");
        assert_eq!(sr.hints().len(), 2);
    }

    #[test]
    fn test_custom_tub_id_length() {
        init_tracing();
        let parser = FurlParser::new(ParserConfig::default().with_tub_id_length(4));
        assert_eq!(parser.config().tub_id_length, 4);
        assert!(parser.parse("pb://abcd@/name").is_ok());
        assert!(parser.parse(&furl("@/name")).is_err());
    }

    #[test]
    fn test_stored_text_skips_length_check() {
        let sr = parse_stored("pb://abcd,ext@127.0.0.1:80/obj").expect("stored furl");
        assert_eq!(sr.tub_id().as_str(), "abcd");
        assert_eq!(sr.hints().len(), 1);

        // Shape, alphabet and hints are still checked.
        assert!(parse_stored("pb://abcd/obj").is_err());
        assert!(parse_stored("pb://ab1d@/obj").is_err());
        assert!(parse_stored("pb://abcd@example.com/obj").is_err());
    }
}
