//! Shared append-only link sink
//!
//! The output file is the one resource mutated by multiple workers at once,
//! so it is owned by a single sink and serialized with a mutex. Each host's
//! batch is sorted, formatted into one buffer, and issued as a single write,
//! which keeps batches all-or-nothing: lines from different hosts can
//! interleave in the file, but lines within a batch cannot.

use std::collections::HashSet;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Single-owner sink over the shared output file
pub struct LinkSink {
    file: Mutex<File>,
}

impl LinkSink {
    /// Creates (or truncates) the output file
    ///
    /// Called once at run start, before any worker is spawned; failure here
    /// is fatal to the run.
    pub async fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path).await?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one host's batch as a single write
    ///
    /// Lines are sorted lexicographically within the batch. An empty batch
    /// writes nothing.
    pub async fn append_batch(&self, links: &HashSet<String>) -> io::Result<()> {
        if links.is_empty() {
            return Ok(());
        }

        let mut sorted: Vec<&str> = links.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let mut batch = String::with_capacity(sorted.iter().map(|l| l.len() + 1).sum());
        for link in sorted {
            batch.push_str(link);
            batch.push('\n');
        }

        let mut file = self.file.lock().await;
        file.write_all(batch.as_bytes()).await?;
        file.flush().await
    }
}
