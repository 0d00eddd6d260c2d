//! Discovery of stream links in a parsed document.
//!
//! Walks every `a[href]` in document order, keeps the ones whose target is an
//! `acestream://` URL, and gathers title candidates around each via the DOM
//! walks. The output is one [`CandidateStream`] per distinct raw link target;
//! a later anchor with the same target is skipped entirely, it does not merge
//! its candidates into the first one.

use crate::engine::SiteRules;
use crate::engine::dom::{search_ancestor_siblings, search_ancestors};
use crate::engine::text::apply_postprocessing;
use crate::engine::uri::is_ace_stream_url;
use crate::models::CandidateStream;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Scan a parsed document for stream links and their title candidates.
///
/// Anchors whose href is not an AceStream URL are skipped with no side
/// effect. Candidate lists are postprocessed per site configuration and
/// deduplicated in first-seen order before being attached to the stream.
pub fn scan_document(document: &Html, rules: &SiteRules) -> Vec<CandidateStream> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut candidates: Vec<CandidateStream> = Vec::new();

    for link in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !is_ace_stream_url(href) {
            continue;
        }

        let raw_url = href.trim().to_string();

        // First occurrence wins; maybe this could check whether the second
        // instance carries a different title.
        if !seen_urls.insert(raw_url.clone()) {
            debug!(%raw_url, "Skipping already seen stream URL");
            continue;
        }

        let mut titles = search_ancestors(link, &rules.target_class);
        if rules.check_sibling {
            titles.extend(search_ancestor_siblings(link, &rules.target_class));
        }

        let titles = apply_postprocessing(titles, rules.postprocessing.as_ref());
        let title_candidates: Vec<String> = titles.into_iter().unique().collect();

        candidates.push(CandidateStream {
            raw_url,
            title_candidates,
        });
    }

    debug!(count = candidates.len(), "Collected candidate streams");
    candidates
}
