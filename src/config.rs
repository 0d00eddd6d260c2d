//! Configuration loading, defaults, and validation.
//!
//! Sites to scrape are described in a YAML file. Each site names the page to
//! fetch, the CSS class that carries title text on that page, whether title
//! text lives in preceding sibling elements, and an optional title filter.
//!
//! A missing config file is created from defaults so a first run leaves
//! something editable behind instead of failing.
//!
//! # Example
//!
//! ```yaml
//! sites:
//!   - name: LiveSports
//!     url: https://example.com/streams
//!     target_class: stream-title
//!     check_sibling: false
//!     title_filter:
//!       rules:
//!         - action: deny
//!           contains: "ADVERTISEMENT"
//!       regex_postprocessing: "^(.*) \\| LiveSports$"
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// Top-level configuration: the list of sites to scrape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    /// Sites to scrape, in the order their results should be reported.
    #[serde(default = "default_sites")]
    pub sites: Vec<ScrapeSite>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
        }
    }
}

fn default_sites() -> Vec<ScrapeSite> {
    vec![ScrapeSite::default()]
}

/// One site to scrape. Immutable for the duration of a scrape pass.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeSite {
    /// Display label used in logs and in the output listing.
    pub name: String,
    /// Page to fetch.
    pub url: String,
    /// Class token identifying elements that carry title text. The empty
    /// string matches elements that have no class attribute at all.
    pub target_class: String,
    /// Also check preceding sibling elements of the link and its ancestors,
    /// for layouts that put the title in a neighboring column.
    pub check_sibling: bool,
    /// Allow/deny rules and postprocessing applied to titles from this site.
    pub title_filter: TitleFilterConfig,
}

impl Default for ScrapeSite {
    fn default() -> Self {
        Self {
            name: "Example".to_string(),
            url: "https://example.com".to_string(),
            target_class: String::new(),
            check_sibling: false,
            title_filter: TitleFilterConfig::default(),
        }
    }
}

/// Per-site title admission rules plus an optional cleanup regex.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TitleFilterConfig {
    /// Ordered rules; the first one that matches a title decides it.
    pub rules: Vec<TitleRule>,
    /// Regex rewriting each raw candidate before consolidation. The first
    /// capture group (or the whole match) replaces the candidate.
    pub regex_postprocessing: Option<String>,
}

/// A single allow or deny rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TitleRule {
    /// What to do with a title this rule matches.
    pub action: RuleAction,
    /// How the rule matches a title.
    #[serde(flatten)]
    pub matcher: RuleMatcher,
}

/// Whether a matching title is admitted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Deny,
}

/// The matching strategy of a rule, keyed by which field is present.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleMatcher {
    /// Title equals this string exactly.
    Exact { exact: String },
    /// Title contains this substring.
    Contains { contains: String },
    /// Title matches this regex.
    Regex { regex: String },
}

/// Load the configuration file, creating it from defaults when missing.
pub fn load_config(config_path: &Path) -> Result<ScraperConfig, Box<dyn Error>> {
    if !config_path.exists() {
        warn!(path = %config_path.display(), "Config file does not exist, creating it");
        let config = ScraperConfig::default();
        write_default_config(&config, config_path)?;
        return Ok(config);
    }

    let contents = fs::read_to_string(config_path)?;
    let mut config: ScraperConfig = serde_yaml::from_str(&contents)?;
    validate(&mut config)?;
    info!(path = %config_path.display(), sites = config.sites.len(), "Loaded configuration");
    Ok(config)
}

/// Normalize and check every site entry.
///
/// URLs are trimmed and must be `http` or `https`; anything else is a startup
/// error rather than a per-run surprise.
fn validate(config: &mut ScraperConfig) -> Result<(), Box<dyn Error>> {
    for site in &mut config.sites {
        site.url = site.url.trim().to_string();
        let parsed = Url::parse(&site.url)
            .map_err(|e| format!("URL for site {} is invalid: {e}", site.name))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "URL for site {} must start with 'http://' or 'https://'",
                site.name
            )
            .into());
        }
    }
    Ok(())
}

fn write_default_config(config: &ScraperConfig, config_path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let header = format!(
        "# Configuration file for {} v{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let body = serde_yaml::to_string(config)?;
    fs::write(config_path, format!("{header}{body}"))?;
    info!(path = %config_path.display(), "Wrote default configuration");
    Ok(())
}
