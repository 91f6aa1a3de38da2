//! Harvester module - the fetch/extract/write pipeline
//!
//! One worker per host composes the fetcher and the extractor, appends its
//! batch to the shared sink, and reports back to the coordinator. The
//! coordinator bounds how many workers run at once and folds their results
//! into the run summary.

mod coordinator;
mod extractor;
mod fetcher;
mod worker;

pub use coordinator::run_harvest;
pub use extractor::LinkExtractor;
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};
pub use worker::{harvest_host, HostReport};
