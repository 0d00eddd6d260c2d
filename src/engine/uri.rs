//! Recognition and normalization of `acestream://` URLs.
//!
//! Listing pages link streams with hrefs like
//! `acestream://f1e2d3c4b5a6978877665544332211ffeeddccbb`. These helpers decide
//! whether an href is such a link, strip the scheme off, and check that what
//! remains has the shape of a content id (40 hex digits). All functions are
//! pure; invalid ids are dropped by the caller, never fatal.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme prefix that marks a stream link.
pub const ACE_URL_PREFIX: &str = "acestream://";

/// Content ids are 40 hex digits, the infohash of the stream.
static CONTENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{40}$").expect("content id regex is valid"));

/// True iff the href is an `acestream://` link with a non-empty remainder.
pub fn is_ace_stream_url(href: &str) -> bool {
    match href.trim().strip_prefix(ACE_URL_PREFIX) {
        Some(rest) => !rest.is_empty(),
        None => false,
    }
}

/// Strip the scheme prefix and surrounding whitespace from a raw link target.
///
/// The remainder is returned verbatim; shape validation is a separate step so
/// that a malformed id can be logged with its original text.
pub fn extract_content_id(raw_url: &str) -> String {
    let trimmed = raw_url.trim();
    trimmed
        .strip_prefix(ACE_URL_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// True iff the string has the exact shape of an AceStream content id.
pub fn is_valid_content_id(content_id: &str) -> bool {
    CONTENT_ID_RE.is_match(content_id)
}
