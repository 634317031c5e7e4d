//! URL decomposition.
//!
//! Splits a `scheme://address[/path]` URL into its protocol and address.
//! Matching is case-sensitive and byte-exact: no lowercasing, no percent
//! decoding, no path resolution. The path component, if any, is discarded.

use crate::error::{Error, Result};

/// Shape every non-empty URL argument must match. The address capture is
/// non-greedy: it ends at the first `/` after at least one address character.
pub const URL_PATTERN: &str = r"^(\w+)://(.+?)(?:/(.*))?$";

/// Protocol and address split out of a URL. Built once per invocation,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub protocol: String,
    pub address: String,
}

impl UrlParts {
    /// Empty parts, used when no URL was supplied. Substituting these into a
    /// template replaces the placeholders with nothing.
    pub fn empty() -> Self {
        UrlParts {
            protocol: String::new(),
            address: String::new(),
        }
    }
}

/// Splits `raw` into [`UrlParts`].
///
/// `None` and `""` yield empty parts: a missing URL means "no substitution
/// requested", not a failure. Anything else must match [`URL_PATTERN`] or
/// the call fails with [`Error::MalformedUrl`].
pub fn split(raw: Option<&str>) -> Result<UrlParts> {
    let raw = match raw {
        None | Some("") => return Ok(UrlParts::empty()),
        Some(r) => r,
    };

    let parts = match_url(raw).ok_or_else(|| Error::MalformedUrl {
        input: raw.to_string(),
        pattern: URL_PATTERN,
    })?;

    tracing::info!("protocol: {}", parts.protocol);
    tracing::info!("address: {}", parts.address);

    Ok(parts)
}

fn match_url(raw: &str) -> Option<UrlParts> {
    let (scheme, rest) = raw.split_once("://")?;
    if scheme.is_empty() || !scheme.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    if rest.is_empty() {
        return None;
    }

    // The address must consume at least one character, so the path split
    // looks for a `/` strictly after the first character of `rest`.
    let first = rest.chars().next().map_or(0, char::len_utf8);
    let address = match rest[first..].find('/') {
        Some(i) => &rest[..first + i],
        None => rest,
    };

    Some(UrlParts {
        protocol: scheme.to_string(),
        address: address.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_scheme_and_address() {
        let parts = split(Some("rdp://10.0.0.1")).unwrap();
        assert_eq!(parts.protocol, "rdp");
        assert_eq!(parts.address, "10.0.0.1");
    }

    #[test]
    fn discards_path() {
        let parts = split(Some("https://host.example/a/b")).unwrap();
        assert_eq!(parts.protocol, "https");
        assert_eq!(parts.address, "host.example");

        // Trailing slash with empty path is still just the address.
        let parts = split(Some("ssh://box/")).unwrap();
        assert_eq!(parts.address, "box");
    }

    #[test]
    fn empty_and_absent_are_empty_parts() {
        assert_eq!(split(None).unwrap(), UrlParts::empty());
        assert_eq!(split(Some("")).unwrap(), UrlParts::empty());
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = split(Some("notaurl")).unwrap_err();
        match err {
            Error::MalformedUrl { input, pattern } => {
                assert_eq!(input, "notaurl");
                assert_eq!(pattern, URL_PATTERN);
            }
            other => panic!("expected MalformedUrl, got {other:?}"),
        }
    }

    #[test]
    fn empty_scheme_or_address_is_malformed() {
        assert!(split(Some("://host")).is_err());
        assert!(split(Some("rdp://")).is_err());
    }

    #[test]
    fn scheme_charset_is_strict() {
        assert!(split(Some("rd-p://host")).is_err());
        assert!(split(Some("r d://host")).is_err());
        // Underscores and digits are fine; case is preserved, not folded.
        let parts = split(Some("Rdp_2://Host")).unwrap();
        assert_eq!(parts.protocol, "Rdp_2");
        assert_eq!(parts.address, "Host");
    }

    #[test]
    fn address_starting_with_slash_keeps_first_char() {
        // Non-greedy capture must take at least one character before the
        // path split, so a leading slash lands in the address.
        let parts = split(Some("file:///x")).unwrap();
        assert_eq!(parts.address, "/x");

        let parts = split(Some("file:////y")).unwrap();
        assert_eq!(parts.address, "/");
    }
}
