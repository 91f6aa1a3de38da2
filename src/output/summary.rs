//! Run summary accumulation
//!
//! Owned exclusively by the coordinator and updated only as worker results
//! are received, so no synchronization is needed. The unique-link total is
//! defined as the union of the per-host in-memory sets, not as distinct
//! lines in the output file.

use crate::harvester::HostReport;
use std::collections::HashSet;

/// Aggregated results of one harvest run
#[derive(Debug, Default)]
pub struct RunSummary {
    total: HashSet<String>,
    per_host: Vec<(String, usize)>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one worker's report into the summary
    pub fn record(&mut self, report: HostReport) {
        self.per_host.push((report.host, report.links.len()));
        self.total.extend(report.links);
    }

    /// Number of distinct links across all hosts
    pub fn unique_links(&self) -> usize {
        self.total.len()
    }

    /// Number of hosts that completed (successfully or not)
    pub fn hosts_processed(&self) -> usize {
        self.per_host.len()
    }

    /// Per-host link counts, in completion order
    pub fn per_host_counts(&self) -> &[(String, usize)] {
        &self.per_host
    }
}
