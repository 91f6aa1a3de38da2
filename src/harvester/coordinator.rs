//! Harvest coordinator - bounded fan-out over the host list
//!
//! The coordinator owns everything the workers share: the HTTP client, the
//! compiled extractor, and the output sink. Workers race independently; the
//! only bound is the semaphore width, and the only fold point is the run
//! summary, which is touched exclusively here as results are drained.

use crate::config::Config;
use crate::harvester::extractor::LinkExtractor;
use crate::harvester::fetcher::build_http_client;
use crate::harvester::worker::harvest_host;
use crate::output::{LinkSink, RunSummary};
use crate::HarvestError;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Runs one harvest over the whole host list
///
/// Creates (truncating) the output sink, then fans out one worker per host
/// across a semaphore-bounded pool. A permit is acquired before each spawn,
/// so excess hosts queue until a slot frees. The run always waits for every
/// worker; individual failures are already absorbed inside the workers.
///
/// # Arguments
///
/// * `hosts` - Raw host strings, one worker each
/// * `config` - Pool width, timeout, and output path
///
/// # Returns
///
/// The run summary: the union of all per-host link sets plus per-host
/// counts. Only startup failures (client build, sink creation) error out.
pub async fn run_harvest(hosts: Vec<String>, config: &Config) -> Result<RunSummary, HarvestError> {
    let client = build_http_client(config.timeout_secs)?;
    let extractor = Arc::new(LinkExtractor::new());
    let sink = Arc::new(LinkSink::create(&config.output_path).await?);
    let semaphore = Arc::new(Semaphore::new(config.concurrency));

    tracing::info!(
        "Harvesting {} hosts with {} workers (timeout {}s)",
        hosts.len(),
        config.concurrency,
        config.timeout_secs
    );

    let mut workers = JoinSet::new();
    for host in hosts {
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        let extractor = Arc::clone(&extractor);
        let sink = Arc::clone(&sink);

        workers.spawn(async move {
            let _permit = permit;
            harvest_host(&client, &extractor, &sink, &host).await
        });
    }

    // Drain completions in whatever order they land
    let mut summary = RunSummary::new();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(report) => {
                println!(
                    "Scraped and saved {} links from {}",
                    report.links.len(),
                    report.host
                );
                summary.record(report);
            }
            Err(error) => {
                // A panicked worker counts as a completed host with no links
                tracing::error!("Host worker panicked: {}", error);
            }
        }
    }

    tracing::info!(
        "Harvest complete: {} hosts, {} unique links",
        summary.hosts_processed(),
        summary.unique_links()
    );

    Ok(summary)
}
