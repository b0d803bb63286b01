//! Persisted run logs for classification batches.
//!
//! Two sinks, both append-only and synchronous:
//! - [`CsvSink`]: one tabular row per classified message, header written
//!   when the file is created.
//! - [`RawLog`]: pretty-printed raw completion payloads for offline
//!   diagnosis of extraction failures.

mod errors;
mod paths;
mod raw;
mod sink;

pub use errors::{Result, RunLogError};
pub use paths::timestamped_path;
pub use raw::RawLog;
pub use sink::CsvSink;
