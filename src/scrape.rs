//! Fetching and scraping of the configured sites.
//!
//! The engine itself never touches the network; this module owns the HTTP
//! client, hands each fetched page to the engine, and collects the per-site
//! results. Failures are isolated per site: a site that cannot be fetched or
//! whose configuration will not compile is logged with a short classification
//! and simply contributes no batch, while the remaining sites proceed.

use crate::config::ScrapeSite;
use crate::engine::{self, SiteRules};
use crate::models::SiteStreams;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Listing pages are small; anything slower than this is a dead site.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Why one site produced no batch this pass.
///
/// All of these abort only the affected site. Per-entry problems (bad ids,
/// filtered titles) never surface here; the engine drops those entries
/// individually.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request could not complete.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    BadStatus(reqwest::StatusCode),
    /// The response body could not be read or decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
    /// A regex in the site's configuration does not compile.
    #[error("invalid pattern in site config: {0}")]
    Config(#[from] regex::Error),
}

impl ScrapeError {
    /// Short tag used in log lines.
    pub fn classification(&self) -> &'static str {
        match self {
            ScrapeError::Transport(_) => "transport",
            ScrapeError::BadStatus(_) => "status",
            ScrapeError::Decode(_) => "decode",
            ScrapeError::Config(_) => "config",
        }
    }
}

/// Fetch a listing page body.
async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(ScrapeError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::BadStatus(status));
    }

    response.text().await.map_err(ScrapeError::Decode)
}

/// Scrape one site: fetch, parse, run the engine.
///
/// Parsing is best-effort (malformed markup still yields a tree), so the
/// failure cases are the site's configuration and the transport.
#[instrument(level = "info", skip_all, fields(site = %site.name))]
pub async fn scrape_site(client: &Client, site: &ScrapeSite) -> Result<SiteStreams, ScrapeError> {
    let rules = SiteRules::compile(site)?;

    debug!(url = %site.url, "Fetching listing page");
    let body = fetch_page(client, &site.url).await?;

    let document = Html::parse_document(&body);
    let streams = engine::scrape_document(&document, &rules);
    info!(count = streams.len(), "Resolved streams");

    Ok(SiteStreams {
        site_name: site.name.clone(),
        streams,
    })
}

/// Scrape every configured site in order, omitting the ones that failed.
///
/// Failed sites are logged and skipped without affecting their neighbors;
/// the result preserves configuration order for the sites that succeeded.
#[instrument(level = "info", skip_all)]
pub async fn scrape_sites(sites: &[ScrapeSite]) -> Vec<SiteStreams> {
    let client = match Client::builder().timeout(FETCH_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            return Vec::new();
        }
    };

    let results: Vec<Result<SiteStreams, ScrapeError>> = stream::iter(sites)
        .then(|site| {
            let client = &client;
            async move {
                scrape_site(client, site).await.inspect_err(|e| {
                    error!(
                        site = %site.name,
                        url = %site.url,
                        classification = e.classification(),
                        error = %e,
                        "Site scrape failed"
                    );
                })
            }
        })
        .collect()
        .await;

    successful_sites(results)
}

/// Keep the successful batches, in their original order.
fn successful_sites(results: Vec<Result<SiteStreams, ScrapeError>>) -> Vec<SiteStreams> {
    results.into_iter().filter_map(Result::ok).collect()
}
