//! Connection hints: where the endpoint named by a FURL may be reached.
//!
//! The hint section of a FURL is a comma-separated list of tokens. Each token
//! is classified by [`parse_hint`] into one of three outcomes:
//!
//! | Token                     | Outcome                         |
//! |---------------------------|---------------------------------|
//! | `host:port`               | IPv4 hint (implicit scheme)     |
//! | `ipv4:host:port`          | IPv4 hint                       |
//! | `ipv6:[host]:port`        | IPv6 hint                       |
//! | empty, or `host` alone    | fatal: hostname but no port     |
//! | malformed `ipv4:`/`ipv6:` | fatal: not an ipv4/ipv6 hint    |
//! | anything else             | ignored                         |
//!
//! Ignored tokens let newer peers advertise hint types older parsers do not
//! understand without making the whole FURL unusable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FurlError;

const IPV4_SCHEME: &str = "ipv4:";
const IPV6_SCHEME: &str = "ipv6:";

/// Address family of a [`ConnectionHint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    /// IPv4 address or hostname resolved over IPv4.
    Ipv4,
    /// IPv6 address or hostname resolved over IPv6.
    Ipv6,
}

/// A recognized network location for an endpoint.
///
/// The port is always in `1..=65535`; hints with other ports are never
/// constructed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConnectionHint {
    /// `host:port` or `ipv4:host:port`.
    Ipv4 {
        /// Hostname or dotted-quad address.
        host: String,
        /// TCP port.
        port: u16,
    },
    /// `ipv6:[host]:port`.
    Ipv6 {
        /// Hostname or IPv6 address, without brackets.
        host: String,
        /// TCP port.
        port: u16,
    },
}

impl ConnectionHint {
    /// Build a hint of the given kind.
    pub fn new(kind: HintKind, host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        match kind {
            HintKind::Ipv4 => ConnectionHint::Ipv4 { host, port },
            HintKind::Ipv6 => ConnectionHint::Ipv6 { host, port },
        }
    }

    /// Address family of this hint.
    pub fn kind(&self) -> HintKind {
        match self {
            ConnectionHint::Ipv4 { .. } => HintKind::Ipv4,
            ConnectionHint::Ipv6 { .. } => HintKind::Ipv6,
        }
    }

    /// Host part of the hint.
    pub fn host(&self) -> &str {
        match self {
            ConnectionHint::Ipv4 { host, .. } | ConnectionHint::Ipv6 { host, .. } => host,
        }
    }

    /// Port part of the hint.
    pub fn port(&self) -> u16 {
        match self {
            ConnectionHint::Ipv4 { port, .. } | ConnectionHint::Ipv6 { port, .. } => *port,
        }
    }
}

impl fmt::Display for ConnectionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionHint::Ipv4 { host, port } => write!(f, "{}{}:{}", IPV4_SCHEME, host, port),
            ConnectionHint::Ipv6 { host, port } => write!(f, "{}[{}]:{}", IPV6_SCHEME, host, port),
        }
    }
}

/// Outcome of classifying a single hint token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult {
    /// The token is a hint this parser understands.
    Recognized(ConnectionHint),
    /// The token is tolerated but contributes nothing.
    Ignored,
    /// The token is malformed badly enough to reject the whole FURL.
    Fatal(FurlError),
}

/// Classify one comma-separated token of a FURL hint section.
///
/// # Examples
///
/// ```
/// use pbref_core::{parse_hint, ConnectionHint, HintResult};
///
/// assert_eq!(
///     parse_hint("127.0.0.1:9900"),
///     HintResult::Recognized(ConnectionHint::Ipv4 { host: "127.0.0.1".into(), port: 9900 })
/// );
/// assert_eq!(parse_hint("udp:127.0.0.1:7700"), HintResult::Ignored);
/// assert!(matches!(parse_hint("example.com"), HintResult::Fatal(_)));
/// ```
pub fn parse_hint(token: &str) -> HintResult {
    if token.is_empty() {
        return HintResult::Fatal(FurlError::bad_hint_no_port(token));
    }

    if let Some(rest) = token.strip_prefix(IPV6_SCHEME) {
        return match split_bracketed(rest) {
            Some((host, port)) => recognize(HintKind::Ipv6, host, port, token),
            None => HintResult::Fatal(FurlError::bad_hint_ip_scheme(token)),
        };
    }

    if let Some(rest) = token.strip_prefix(IPV4_SCHEME) {
        return match split_plain(rest) {
            Some((host, port)) => recognize(HintKind::Ipv4, host, port, token),
            None => HintResult::Fatal(FurlError::bad_hint_ip_scheme(token)),
        };
    }

    match token.split_once(':') {
        None => HintResult::Fatal(FurlError::bad_hint_no_port(token)),
        Some((host, port)) if is_digits(port) => {
            recognize(HintKind::Ipv4, host, port, token)
        }
        Some(_) => {
            tracing::debug!(hint = token, "ignoring unrecognized connection hint");
            HintResult::Ignored
        }
    }
}

/// Split `[HOST]:PORT`.
fn split_bracketed(rest: &str) -> Option<(&str, &str)> {
    let (host, tail) = rest.strip_prefix('[')?.split_once(']')?;
    let port = tail.strip_prefix(':')?;
    if host.is_empty() || host.contains('[') || !is_digits(port) {
        return None;
    }
    Some((host, port))
}

/// Split `HOST:PORT` where HOST carries no brackets.
fn split_plain(rest: &str) -> Option<(&str, &str)> {
    let (host, port) = rest.split_once(':')?;
    if host.is_empty() || host.contains(['[', ']']) || !is_digits(port) {
        return None;
    }
    Some((host, port))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn recognize(kind: HintKind, host: &str, port: &str, token: &str) -> HintResult {
    match port.parse::<u16>() {
        Ok(port) if port != 0 => HintResult::Recognized(ConnectionHint::new(kind, host, port)),
        _ => {
            tracing::debug!(hint = token, "ignoring connection hint with out-of-range port");
            HintResult::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipv4(host: &str, port: u16) -> HintResult {
        HintResult::Recognized(ConnectionHint::new(HintKind::Ipv4, host, port))
    }

    fn ipv6(host: &str, port: u16) -> HintResult {
        HintResult::Recognized(ConnectionHint::new(HintKind::Ipv6, host, port))
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

    fn fatal_message(result: HintResult) -> String {
        match result {
            HintResult::Fatal(err) => err.to_string(),
            other => panic!("expected fatal hint, got {:?}", other),
        }
    }

    #[test]
    fn test_implicit_ipv4() {
        assert_eq!(parse_hint("127.0.0.1:9900"), ipv4("127.0.0.1", 9900));
        assert_eq!(parse_hint("remote:8899"), ipv4("remote", 8899));
    }

    #[test]
    fn test_explicit_ipv4() {
        assert_eq!(parse_hint("ipv4:10.0.0.1:80"), ipv4("10.0.0.1", 80));
        assert_eq!(parse_hint("ipv4:example.com:443"), ipv4("example.com", 443));
    }

    #[test]
    fn test_explicit_ipv6() {
        assert_eq!(parse_hint("ipv6:[::1]:9900"), ipv6("::1", 9900));
        assert_eq!(parse_hint("ipv6:[remote2]:9988"), ipv6("remote2", 9988));
        assert_eq!(
            parse_hint("ipv6:[fe80::1:2:3]:65535"),
            ipv6("fe80::1:2:3", 65535)
        );
    }

    #[test]
    fn test_empty_token_is_fatal() {
        assert_eq!(
            fatal_message(parse_hint("")),
            "bad connection hint '' (hostname, but no port)"
        );
    }

    #[test]
    fn test_hostname_without_port_is_fatal() {
        assert_eq!(
            fatal_message(parse_hint("127.0.0.1")),
            "bad connection hint '127.0.0.1' (hostname, but no port)"
        );
        assert_eq!(
            fatal_message(parse_hint("example.com")),
            "bad connection hint 'example.com' (hostname, but no port)"
        );
    }

    #[test]
    fn test_malformed_ip_scheme_is_fatal() {
        for token in [
            "ipv6:[example.com]",
            "ipv6:example.com",
            "ipv6:[::1]",
            "ipv6:::1",
            "ipv6:[]:80",
            "ipv6:[::1]:",
            "ipv6:[::1]:http",
            "ipv4:[example.com]",
            "ipv4:[example.com]:80",
            "ipv4:example.com",
            "ipv4::80",
            "ipv4:host:80:90",
        ] {
            let message = fatal_message(parse_hint(token));
            assert_eq!(
                message,
                format!(
                    "bad connection hint '{}' (specifies ipv[46]:, but doesn't contain an ipv[46] hint)",
                    token
                )
            );
        }
    }

    #[test]
    fn test_unknown_shapes_are_ignored() {
        init_tracing();
        assert_eq!(parse_hint("udp:127.0.0.1:7700"), HintResult::Ignored);
        assert_eq!(parse_hint("127.0.0.1:7700:postextension"), HintResult::Ignored);
        assert_eq!(parse_hint("tor:abcdef.onion"), HintResult::Ignored);
        assert_eq!(parse_hint("example.com:http"), HintResult::Ignored);
    }

    #[test]
    fn test_out_of_range_port_is_ignored() {
        init_tracing();
        assert_eq!(parse_hint("127.0.0.1:0"), HintResult::Ignored);
        assert_eq!(parse_hint("127.0.0.1:65536"), HintResult::Ignored);
        assert_eq!(parse_hint("ipv4:127.0.0.1:99999999999"), HintResult::Ignored);
        assert_eq!(parse_hint("ipv6:[::1]:70000"), HintResult::Ignored);
    }

    #[test]
    fn test_hint_accessors_and_display() {
        let hint = ConnectionHint::new(HintKind::Ipv6, "::1", 9900);
        assert_eq!(hint.kind(), HintKind::Ipv6);
        assert_eq!(hint.host(), "::1");
        assert_eq!(hint.port(), 9900);
        assert_eq!(hint.to_string(), "ipv6:[::1]:9900");

        let hint = ConnectionHint::new(HintKind::Ipv4, "127.0.0.1", 80);
        assert_eq!(hint.to_string(), "ipv4:127.0.0.1:80");
    }

    #[test]
    fn test_display_form_parses_back() {
        for hint in [
            ConnectionHint::new(HintKind::Ipv4, "example.com", 1234),
            ConnectionHint::new(HintKind::Ipv6, "::1", 4321),
        ] {
            assert_eq!(parse_hint(&hint.to_string()), HintResult::Recognized(hint));
        }
    }

    #[test]
    fn test_connection_hint_serde_tagged() {
        let hint = ConnectionHint::new(HintKind::Ipv6, "::1", 9900);
        let json = serde_json::to_string(&hint).expect("serialize");
        assert_eq!(json, r#"{"kind":"ipv6","host":"::1","port":9900}"#);
        let decoded: ConnectionHint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(hint, decoded);
    }
}
