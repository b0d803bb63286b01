use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use triage_core::ParsedResponse;

use crate::errors::Result;

const HEADERS: [&str; 6] = [
    "text",
    "category",
    "subcategory",
    "prompt_cost",
    "completion_cost",
    "duration",
];

/// Append-only CSV log, one row per classified message.
///
/// The header row goes out when the file is created; subsequent opens only
/// append. Every field is quoted so embedded delimiters survive.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, row: &ParsedResponse) -> Result<()> {
        let fresh = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .has_headers(false)
            .from_writer(file);

        if fresh {
            writer.write_record(HEADERS)?;
            tracing::debug!(path = %self.path.display(), "created run log");
        }

        let subcategories = row.subcategories.join(";");
        let prompt_cost = row.usage.prompt_tokens.to_string();
        let completion_cost = row.usage.completion_tokens.to_string();
        let duration = format!("{:.1}", row.duration.as_secs_f64());
        writer.write_record([
            row.message.as_str(),
            row.category.as_str(),
            subcategories.as_str(),
            prompt_cost.as_str(),
            completion_cost.as_str(),
            duration.as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}
