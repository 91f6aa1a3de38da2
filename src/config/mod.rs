//! Configuration for Link-Harvest
//!
//! The configuration surface is deliberately small: an output path, a request
//! timeout, and a worker pool width, all with fixed defaults and overridable
//! from the command line. The host list is the only required input.

use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Default output file for harvested links
pub const DEFAULT_OUTPUT_FILE: &str = "links.txt";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default number of concurrent host workers
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Runtime configuration for a harvest run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the shared output file (created/truncated at run start)
    pub output_path: PathBuf,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum number of hosts fetched concurrently
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Loads the host list from a text file
///
/// One host per line; surrounding whitespace is trimmed and blank lines are
/// dropped. A missing file or an empty result is a fatal startup error, per
/// the propagation policy: nothing has been fetched yet, so there is nothing
/// to isolate.
pub fn load_hosts(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::HostList {
        path: path.display().to_string(),
        source,
    })?;

    let hosts: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if hosts.is_empty() {
        return Err(ConfigError::EmptyHostList(path.display().to_string()));
    }

    Ok(hosts)
}
