//! Data models for discovered streams and their resolved representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`CandidateStream`]: A raw AceStream link with every title string gathered around it
//! - [`FoundStream`]: A resolved `(title, content id)` pair ready for the listing
//! - [`SiteStreams`]: All resolved streams from one site in one scrape pass
//! - [`StreamReport`]: The run envelope written to JSON output
//!
//! [`CandidateStream`] instances live only for the duration of one scrape pass
//! over one document. [`SiteStreams`] is the externally visible artifact; a
//! site whose fetch failed contributes no `SiteStreams` at all, so callers can
//! distinguish "no streams found" from "site unreachable".

use serde::{Deserialize, Serialize};

/// An AceStream link as found in a document, before title resolution.
///
/// One instance exists per *distinct* raw link target in a document. A later
/// occurrence of the same target is skipped, not merged into this instance.
///
/// # Fields
///
/// * `raw_url` - The literal `acestream://...` string from the href, trimmed
/// * `title_candidates` - Distinct title strings gathered from the DOM around the link,
///   in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStream {
    /// The raw link target as it appeared in the document.
    pub raw_url: String,
    /// Title candidates collected around the link, deduplicated, first-seen order.
    pub title_candidates: Vec<String>,
}

/// A stream with its consolidated title and validated content id.
///
/// Derived from a [`CandidateStream`] by the consolidator; immutable once
/// produced. The `content_id` always satisfies the 40-hex-digit shape and the
/// `title` is never empty (a placeholder is used when no candidate survived).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FoundStream {
    /// The best-guess human-readable title.
    pub title: String,
    /// The normalized AceStream content id, scheme prefix stripped.
    pub content_id: String,
}

/// Every stream resolved from one site in one scrape pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteStreams {
    /// Display name of the site, from configuration.
    pub site_name: String,
    /// Resolved streams in document order of first occurrence.
    pub streams: Vec<FoundStream>,
}

/// The full result of one scrape run across all configured sites.
///
/// Serialized to JSON for the web player to consume. Sites that failed to
/// fetch are absent from `sites` rather than present-but-empty.
#[derive(Debug, Deserialize, Serialize)]
pub struct StreamReport {
    /// The local date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run in `HH:MM:SS.microseconds` format.
    pub local_time: String,
    /// One entry per successfully scraped site, in configuration order.
    pub sites: Vec<SiteStreams>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_stream_creation() {
        let candidate = CandidateStream {
            raw_url: "acestream://aaaabbbbccccddddeeeeffff0000111122223333".to_string(),
            title_candidates: vec!["Channel X".to_string()],
        };
        assert_eq!(candidate.title_candidates.len(), 1);
        assert!(candidate.raw_url.starts_with("acestream://"));
    }

    #[test]
    fn test_found_stream_serialization() {
        let stream = FoundStream {
            title: "Channel X".to_string(),
            content_id: "aaaabbbbccccddddeeeeffff0000111122223333".to_string(),
        };

        let json = serde_json::to_string(&stream).unwrap();
        assert!(json.contains("Channel X"));
        assert!(json.contains("aaaabbbbccccddddeeeeffff0000111122223333"));
    }

    #[test]
    fn test_site_streams_deserialization() {
        let json = r#"{
            "site_name": "Example",
            "streams": [
                {"title": "Channel X", "content_id": "aaaabbbbccccddddeeeeffff0000111122223333"}
            ]
        }"#;

        let site: SiteStreams = serde_json::from_str(json).unwrap();
        assert_eq!(site.site_name, "Example");
        assert_eq!(site.streams.len(), 1);
        assert_eq!(site.streams[0].title, "Channel X");
    }

    #[test]
    fn test_stream_report_round_trip() {
        let report = StreamReport {
            local_date: "2025-05-06".to_string(),
            local_time: "20:30:00".to_string(),
            sites: vec![SiteStreams {
                site_name: "Example".to_string(),
                streams: vec![],
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: StreamReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.local_date, "2025-05-06");
        assert_eq!(parsed.sites.len(), 1);
        assert_eq!(parsed.sites[0].streams.len(), 0);
    }
}
