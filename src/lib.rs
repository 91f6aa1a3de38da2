//! Link-Harvest: a one-shot per-host link harvester
//!
//! This crate fetches the root page of every host in a list, extracts all
//! discoverable resource references (hyperlinks, scripts, stylesheets, images,
//! and URL-shaped substrings in raw markup), and appends them to a shared
//! output file, deduplicated and sorted per host.

pub mod config;
pub mod harvester;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Link-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker pool closed unexpectedly: {0}")]
    Pool(#[from] tokio::sync::AcquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// All of these are startup-phase errors: they are surfaced before any
/// worker starts and abort the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read host list {path}: {source}")]
    HostList {
        path: String,
        source: std::io::Error,
    },

    #[error("host list {0} contains no hosts")]
    EmptyHostList(String),
}

/// Result type alias for Link-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

// Re-export commonly used types
pub use config::Config;
pub use harvester::{run_harvest, HostReport, LinkExtractor};
pub use output::{LinkSink, RunSummary};
pub use url::normalize_host;
