//! Link-Harvest main entry point
//!
//! Thin CLI shell around the harvest core: parse arguments, load the host
//! list, run the bounded worker pool, print the final total.

use anyhow::Context;
use clap::Parser;
use link_harvest::config::{
    load_hosts, Config, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS,
};
use link_harvest::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Harvest: fetch each host's root page and collect every link on it
///
/// Reads a host list (one host per line), fetches each root page once with
/// redirect following, extracts all discoverable resource references, and
/// appends them to a shared output file, sorted per host.
#[derive(Parser, Debug)]
#[command(name = "link-harvest")]
#[command(version)]
#[command(about = "Harvest all links from a list of hosts", long_about = None)]
struct Cli {
    /// Path to the host list file (one host per line)
    #[arg(value_name = "HOSTS")]
    hosts: PathBuf,

    /// Output file for harvested links
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Number of hosts fetched concurrently
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let hosts = load_hosts(&cli.hosts)
        .with_context(|| format!("cannot start harvest from {}", cli.hosts.display()))?;
    tracing::info!("Loaded {} hosts from {}", hosts.len(), cli.hosts.display());

    let config = Config {
        output_path: cli.output,
        timeout_secs: cli.timeout,
        concurrency: cli.concurrency,
    };

    let summary = run_harvest(hosts, &config)
        .await
        .context("harvest run failed")?;

    println!("Total unique links processed: {}", summary.unique_links());

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_harvest=info,warn"),
            1 => EnvFilter::new("link_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
