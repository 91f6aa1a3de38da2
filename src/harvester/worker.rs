//! Per-host worker
//!
//! One worker owns the whole pipeline for one host: normalize, fetch,
//! extract, append the batch to the shared sink, report. Nothing a worker
//! hits is allowed to escape its boundary; every failure becomes a printed
//! notice and an empty result so sibling workers are unaffected.

use crate::harvester::extractor::LinkExtractor;
use crate::harvester::fetcher::fetch_page;
use crate::output::LinkSink;
use crate::url::normalize_host;
use reqwest::Client;
use std::collections::HashSet;

/// What one host worker hands back to the coordinator
#[derive(Debug)]
pub struct HostReport {
    /// The normalized host this report belongs to
    pub host: String,

    /// Resolved links extracted from the host's root page; empty on failure
    pub links: HashSet<String>,
}

impl HostReport {
    fn empty(host: String) -> Self {
        Self {
            host,
            links: HashSet::new(),
        }
    }
}

/// Runs the fetch/extract/write pipeline for a single host
///
/// The redirect and error notices printed here are part of the observable
/// interface, so they go to stdout directly rather than through tracing.
pub async fn harvest_host(
    client: &Client,
    extractor: &LinkExtractor,
    sink: &LinkSink,
    raw_host: &str,
) -> HostReport {
    let host = normalize_host(raw_host);

    let page = match fetch_page(client, &host).await {
        Ok(page) => page,
        Err(error) => {
            println!("Error fetching {}: {}", host, error);
            return HostReport::empty(host);
        }
    };

    if page.redirected {
        println!("{} redirected to {}", host, page.final_url);
    }

    let links = extractor.extract(&page.body, &page.final_url);
    tracing::debug!("Extracted {} links from {}", links.len(), host);

    // A failed batch write is isolated to this host; the in-memory set is
    // still reported so the run total stays the sum of per-host sets.
    if let Err(error) = sink.append_batch(&links).await {
        tracing::error!("Failed to write links for {}: {}", host, error);
    }

    HostReport { host, links }
}
