use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Append-only dump of raw completion payloads, one pretty-printed JSON
/// entry per call with a rule line between entries. This is the artifact to
/// read when extraction starts reporting malformed echo or payload drift.
pub struct RawLog {
    path: PathBuf,
}

impl RawLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &serde_json::Value) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        serde_json::to_writer_pretty(&mut file, entry)?;
        writeln!(file, "\n{}", "=".repeat(50))?;
        Ok(())
    }
}
