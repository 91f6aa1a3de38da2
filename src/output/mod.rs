//! Output module for Link-Harvest
//!
//! Two run-lifetime resources live here: the shared append-only link sink
//! that all host workers write their batches to, and the run summary the
//! coordinator folds worker results into.

mod sink;
mod summary;

pub use sink::LinkSink;
pub use summary::RunSummary;
