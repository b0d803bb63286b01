use std::path::{Path, PathBuf};

use chrono::Local;

/// Per-run raw log path: `{yymmdd_HHMMSS}_{project}_raw.md` under `dir`,
/// local time, so batch runs sort chronologically in a listing.
pub fn timestamped_path(dir: &Path, project: &str) -> PathBuf {
    let stamp = Local::now().format("%y%m%d_%H%M%S");
    dir.join(format!("{stamp}_{project}_raw.md"))
}
