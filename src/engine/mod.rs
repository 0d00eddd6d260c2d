//! The HTML discovery and title-resolution engine.
//!
//! Turns one parsed listing page into a clean list of `(title, content id)`
//! pairs. The pipeline per document:
//!
//! 1. **Scan** ([`scan`]): find every anchor whose href is an `acestream://`
//!    URL, first occurrence per target only
//! 2. **Search** ([`dom`]): walk ancestors (and optionally their preceding
//!    siblings) of each link, collecting text from elements marked with the
//!    site's `target_class`
//! 3. **Consolidate** ([`resolve`]): reject batch-wide boilerplate, truncate,
//!    merge to one title per stream, validate ids, apply the title filter
//!
//! The engine is synchronous and pure: it performs no I/O, holds no shared
//! state, and returns values with no references into the document tree, so
//! sites can be processed in parallel by whoever calls it.

pub mod dom;
pub mod filter;
pub mod resolve;
pub mod scan;
pub mod text;
pub mod uri;

use crate::config::ScrapeSite;
use crate::models::FoundStream;
use filter::TitleGate;
use regex::Regex;
use scraper::Html;

/// A site's configuration with its regexes compiled for one scrape pass.
#[derive(Debug)]
pub struct SiteRules {
    /// Class token that marks title-bearing elements.
    pub target_class: String,
    /// Whether to also search preceding siblings of the link and its ancestors.
    pub check_sibling: bool,
    /// Optional cleanup regex applied to every gathered candidate.
    pub postprocessing: Option<Regex>,
    /// Compiled allow/deny rules for consolidated titles.
    pub gate: TitleGate,
}

impl SiteRules {
    /// Compile a site's filter and postprocessing regexes.
    ///
    /// An invalid pattern makes the whole site unusable for this pass; the
    /// caller logs it and moves on to the next site.
    pub fn compile(site: &ScrapeSite) -> Result<Self, regex::Error> {
        let postprocessing = site
            .title_filter
            .regex_postprocessing
            .as_deref()
            .map(Regex::new)
            .transpose()?;

        Ok(Self {
            target_class: site.target_class.clone(),
            check_sibling: site.check_sibling,
            postprocessing,
            gate: TitleGate::compile(&site.title_filter)?,
        })
    }
}

/// Resolve every stream in one parsed document.
///
/// The composition of [`scan::scan_document`] and
/// [`resolve::resolve_candidates`]; output order is document order of first
/// occurrence.
pub fn scrape_document(document: &Html, rules: &SiteRules) -> Vec<FoundStream> {
    let candidates = scan::scan_document(document, rules);
    resolve::resolve_candidates(candidates, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_A: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    const ID_B: &str = "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

    fn site(target_class: &str, check_sibling: bool) -> ScrapeSite {
        ScrapeSite {
            target_class: target_class.to_string(),
            check_sibling,
            ..ScrapeSite::default()
        }
    }

    #[test]
    fn test_scrape_document_resolves_titles_from_marked_ancestors() {
        let html = format!(
            r#"<div class="title">Channel X <a href="acestream://{ID_A}"></a></div>
               <div class="title">Channel Y <a href="acestream://{ID_B}"></a></div>"#
        );
        let document = Html::parse_document(&html);
        let rules = SiteRules::compile(&site("title", false)).unwrap();

        let found = scrape_document(&document, &rules);
        assert_eq!(
            found,
            vec![
                FoundStream {
                    title: "Channel X".to_string(),
                    content_id: ID_A.to_string(),
                },
                FoundStream {
                    title: "Channel Y".to_string(),
                    content_id: ID_B.to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_scrape_document_shared_badge_is_rejected_as_boilerplate() {
        // Both rows carry a "LIVE NOW" badge as the preceding sibling of
        // their card; it lands in both candidate sets and is rejected, so the
        // titles are unchanged.
        let html = format!(
            r#"<div>
                 <span class="title">LIVE NOW</span>
                 <div class="title">Channel X <a href="acestream://{ID_A}"></a></div>
               </div>
               <div>
                 <span class="title">LIVE NOW</span>
                 <div class="title">Channel Y <a href="acestream://{ID_B}"></a></div>
               </div>"#
        );
        let document = Html::parse_document(&html);
        let rules = SiteRules::compile(&site("title", true)).unwrap();

        let found = scrape_document(&document, &rules);
        assert_eq!(found[0].title, "Channel X");
        assert_eq!(found[1].title, "Channel Y");
    }

    #[test]
    fn test_scrape_document_identical_runs_are_identical() {
        let html = format!(
            r#"<div class="title">Channel X <a href="acestream://{ID_A}"></a></div>
               <div class="title">Channel Y <a href="acestream://{ID_B}"></a></div>
               <a href="https://example.com/unrelated"></a>"#
        );
        let document = Html::parse_document(&html);
        let rules = SiteRules::compile(&site("title", false)).unwrap();

        let first = scrape_document(&document, &rules);
        let second = scrape_document(&document, &rules);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_scrape_document_every_id_is_well_formed() {
        let html = format!(
            r#"<div class="title">Good <a href="acestream://{ID_A}"></a></div>
               <div class="title">Bad <a href="acestream://not-forty-hex"></a></div>"#
        );
        let document = Html::parse_document(&html);
        let rules = SiteRules::compile(&site("title", false)).unwrap();

        let found = scrape_document(&document, &rules);
        assert_eq!(found.len(), 1);
        assert!(
            found
                .iter()
                .all(|s| uri::is_valid_content_id(&s.content_id))
        );
    }

    #[test]
    fn test_site_rules_compile_rejects_bad_postprocessing_regex() {
        let mut bad = ScrapeSite::default();
        bad.title_filter.regex_postprocessing = Some("(unclosed".to_string());
        assert!(SiteRules::compile(&bad).is_err());
    }
}
