//! Consolidation of candidate titles into one resolved stream per link.
//!
//! Works over the whole per-site batch at once because "boilerplate" is
//! defined relative to the batch: a string collected for effectively every
//! row (a "Watch" button label, a "LIVE" badge) is a structural artifact, not
//! a title, even though its content looks legitimate. Everything that goes
//! wrong here is per-entry: the entry is logged and skipped, its siblings and
//! the rest of the batch are unaffected.

use crate::engine::SiteRules;
use crate::engine::uri::{extract_content_id, is_valid_content_id};
use crate::models::{CandidateStream, FoundStream};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Longest title that will be emitted; longer candidates are cut, not dropped.
pub const STREAM_TITLE_MAX_LENGTH: usize = 100;

/// Placeholder for streams where no candidate title survived.
pub const UNKNOWN_TITLE: &str = "<Unknown Title>";

/// Consolidate a batch of candidate streams into resolved streams.
///
/// Per candidate stream: reject batch-wide boilerplate, truncate what
/// survives, merge into a single title (joined with `" / "` when several
/// remain, placeholder when none do), then validate the content id and run
/// the title through the site's filter. Output preserves input order.
pub fn resolve_candidates(
    candidates: Vec<CandidateStream>,
    rules: &SiteRules,
) -> Vec<FoundStream> {
    let batch_size = candidates.len();

    // Occurrence count of every candidate title across the whole batch.
    let mut title_counts: HashMap<&str, usize> = HashMap::new();
    for candidate in &candidates {
        for title in &candidate.title_candidates {
            *title_counts.entry(title.as_str()).or_insert(0) += 1;
        }
    }

    let mut found = Vec::new();
    for candidate in &candidates {
        let mut surviving: Vec<String> = Vec::new();
        for title in &candidate.title_candidates {
            // Anything that was collected for every row in the batch is
            // structural chrome, not a title.
            let count = title_counts.get(title.as_str()).copied().unwrap_or(0);
            if count >= batch_size {
                debug!(%title, count, batch_size, "Rejecting boilerplate candidate");
                continue;
            }
            surviving.push(truncate_title(title));
        }

        let title = if surviving.is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            surviving.join(" / ")
        };

        let content_id = extract_content_id(&candidate.raw_url);
        if !is_valid_content_id(&content_id) {
            warn!(%content_id, "Invalid content id found in candidate, skipping");
            continue;
        }

        if !rules.gate.is_allowed(&title) {
            warn!(%title, %content_id, "Title not allowed by filter, skipping");
            continue;
        }

        found.push(FoundStream { title, content_id });
    }

    debug!(
        resolved = found.len(),
        candidates = batch_size,
        "Consolidated candidate streams"
    );
    found
}

/// Cut a title to [`STREAM_TITLE_MAX_LENGTH`] characters.
fn truncate_title(title: &str) -> String {
    if title.chars().count() > STREAM_TITLE_MAX_LENGTH {
        title.chars().take(STREAM_TITLE_MAX_LENGTH).collect()
    } else {
        title.to_string()
    }
}
