//! Cleanup of text pulled out of the DOM.
//!
//! Text nodes on listing pages come with layout whitespace (indentation,
//! newlines between inline elements) that has nothing to do with the title.
//! Everything gathered by the DOM search goes through [`clean_text`] first.
//! Sites can additionally configure a postprocessing regex that rewrites each
//! candidate, e.g. to strip a fixed suffix the site appends to every row.

use regex::Regex;

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Apply a configured postprocessing regex to every candidate.
///
/// Each candidate is rewritten to the first capture group of the first match,
/// or to the whole match when the pattern has no capture group. A candidate
/// the pattern does not match passes through unchanged; a rewrite that comes
/// out empty drops the candidate rather than keeping an empty string. With no
/// pattern configured the input is returned untouched.
pub fn apply_postprocessing(candidates: Vec<String>, pattern: Option<&Regex>) -> Vec<String> {
    let Some(re) = pattern else {
        return candidates;
    };

    candidates
        .into_iter()
        .filter_map(|candidate| rewrite_candidate(&candidate, re))
        .collect()
}

fn rewrite_candidate(candidate: &str, re: &Regex) -> Option<String> {
    let Some(caps) = re.captures(candidate) else {
        return Some(candidate.to_string());
    };

    let matched = caps
        .get(1)
        .or_else(|| caps.get(0))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if matched.is_empty() { None } else { Some(matched) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Channel   X  "), "Channel X");
        assert_eq!(clean_text("Channel\n\tX"), "Channel X");
        assert_eq!(clean_text("\n  \n"), "");
        assert_eq!(clean_text("already clean"), "already clean");
    }

    #[test]
    fn test_apply_postprocessing_without_pattern_is_identity() {
        let candidates = vec!["Channel X".to_string(), "  raw  ".to_string()];
        assert_eq!(apply_postprocessing(candidates.clone(), None), candidates);
    }

    #[test]
    fn test_apply_postprocessing_extracts_capture_group() {
        let re = Regex::new(r"^(.*) \| LiveSports$").unwrap();
        let candidates = vec![
            "Channel X | LiveSports".to_string(),
            "Channel Y | LiveSports".to_string(),
        ];
        assert_eq!(
            apply_postprocessing(candidates, Some(&re)),
            vec!["Channel X".to_string(), "Channel Y".to_string()]
        );
    }

    #[test]
    fn test_apply_postprocessing_whole_match_without_group() {
        let re = Regex::new(r"[A-Za-z ]+").unwrap();
        let candidates = vec!["123 Channel X 456".to_string()];
        assert_eq!(
            apply_postprocessing(candidates, Some(&re)),
            vec!["Channel X".to_string()]
        );
    }

    #[test]
    fn test_apply_postprocessing_drops_empty_rewrites() {
        // The group matches zero characters, so the rewrite is empty and the
        // candidate disappears instead of surviving as "".
        let re = Regex::new(r"^(\d*)").unwrap();
        let candidates = vec!["Channel X".to_string(), "42".to_string()];
        assert_eq!(
            apply_postprocessing(candidates, Some(&re)),
            vec!["42".to_string()]
        );
    }

    #[test]
    fn test_apply_postprocessing_keeps_unmatched_candidates() {
        let re = Regex::new(r"^(.*) \| LiveSports$").unwrap();
        let candidates = vec!["Channel X".to_string()];
        assert_eq!(
            apply_postprocessing(candidates, Some(&re)),
            vec!["Channel X".to_string()]
        );
    }
}
