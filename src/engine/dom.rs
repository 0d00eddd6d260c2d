//! DOM walks that gather title candidates around a stream link.
//!
//! Listing pages rarely put the title inside the link itself. It usually
//! lives in some ancestor container (a card, a table row) or, on tabular
//! layouts, in the element immediately before the link's column. Both walks
//! identify title-bearing elements by an exact class-token match against the
//! site's configured `target_class`.
//!
//! Both walks materialize the ancestor chain and reverse it, so candidates
//! are emitted outer-to-inner regardless of tree depth.

use crate::engine::text::clean_text;
use scraper::ElementRef;
use std::collections::HashSet;

/// The element's class attribute as an explicit token set, empty when absent.
fn class_tokens<'a>(element: ElementRef<'a>) -> HashSet<&'a str> {
    element.value().classes().collect()
}

/// Exact-membership check of `target_class` against the element's classes.
///
/// The empty `target_class` is a wildcard for elements carrying no class at
/// all; an element that has classes never matches it.
fn carries_target_class(element: ElementRef<'_>, target_class: &str) -> bool {
    let tokens = class_tokens(element);
    if target_class.is_empty() {
        tokens.is_empty()
    } else {
        tokens.contains(target_class)
    }
}

/// Full text content of an element, whitespace-normalized.
fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Collect title candidates from the link's ancestors.
///
/// Ascends from the link to the document root and emits the cleaned text of
/// every ancestor whose classes contain `target_class`, outermost ancestor
/// first. The link element itself is not checked by this pass.
pub fn search_ancestors(link: ElementRef<'_>, target_class: &str) -> Vec<String> {
    let mut chain: Vec<ElementRef<'_>> =
        link.ancestors().filter_map(ElementRef::wrap).collect();
    chain.reverse();

    let mut candidates = Vec::new();
    for ancestor in chain {
        if carries_target_class(ancestor, target_class) {
            candidates.push(element_text(ancestor));
        }
    }
    candidates
}

/// Collect title candidates from preceding siblings of the link and its
/// ancestors.
///
/// For the link and each ancestor up to the root (outer-to-inner), the
/// nearest preceding sibling element is checked against `target_class` and
/// its cleaned text emitted on a match. Covers layouts where the title sits
/// in a neighboring column or row rather than in a shared container. A node
/// without a preceding sibling contributes nothing.
pub fn search_ancestor_siblings(link: ElementRef<'_>, target_class: &str) -> Vec<String> {
    let mut chain: Vec<ElementRef<'_>> = std::iter::once(link)
        .chain(link.ancestors().filter_map(ElementRef::wrap))
        .collect();
    chain.reverse();

    let mut candidates = Vec::new();
    for node in chain {
        let Some(sibling) = node.prev_siblings().find_map(ElementRef::wrap) else {
            continue;
        };
        if carries_target_class(sibling, target_class) {
            candidates.push(element_text(sibling));
        }
    }
    candidates
}
