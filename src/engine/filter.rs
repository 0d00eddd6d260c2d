//! Admission rules for consolidated titles.
//!
//! Sites configure an ordered list of allow/deny rules (exact, substring, or
//! regex). The first rule matching a title decides it; a title no rule
//! matches is allowed. A rejected title drops the whole resolved entry, not
//! just the offending candidate.

use crate::config::{RuleAction, RuleMatcher, TitleFilterConfig};
use regex::Regex;

/// A title filter with its regexes compiled, ready for one scrape pass.
#[derive(Debug)]
pub struct TitleGate {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    action: RuleAction,
    matcher: CompiledMatcher,
}

#[derive(Debug)]
enum CompiledMatcher {
    Exact(String),
    Contains(String),
    Pattern(Regex),
}

impl CompiledMatcher {
    fn matches(&self, title: &str) -> bool {
        match self {
            CompiledMatcher::Exact(value) => title == value,
            CompiledMatcher::Contains(value) => title.contains(value.as_str()),
            CompiledMatcher::Pattern(re) => re.is_match(title),
        }
    }
}

impl TitleGate {
    /// Compile the configured rules. Fails on an invalid regex, which the
    /// caller treats as a per-site configuration problem.
    pub fn compile(config: &TitleFilterConfig) -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let matcher = match &rule.matcher {
                RuleMatcher::Exact { exact } => CompiledMatcher::Exact(exact.clone()),
                RuleMatcher::Contains { contains } => CompiledMatcher::Contains(contains.clone()),
                RuleMatcher::Regex { regex } => CompiledMatcher::Pattern(Regex::new(regex)?),
            };
            rules.push(CompiledRule {
                action: rule.action,
                matcher,
            });
        }
        Ok(Self { rules })
    }

    /// Decide a title: first matching rule wins, no match means allowed.
    pub fn is_allowed(&self, title: &str) -> bool {
        for rule in &self.rules {
            if rule.matcher.matches(title) {
                return rule.action == RuleAction::Allow;
            }
        }
        true
    }
}
