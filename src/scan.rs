// src/scan.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;
use tracing::warn;

/// All `*.csv` files directly inside `dir`, sorted by path.
///
/// Non-recursive by design, and regular files only (a directory named
/// `foo.csv` is skipped). Each call re-lists the directory, so the sequence
/// can be restarted cheaply.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.csv", dir.display());
    let mut files = Vec::new();
    for entry in glob(&pattern).context("invalid glob pattern for csv scan")? {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                }
            }
            Err(e) => warn!("cannot read glob entry: {}", e),
        }
    }
    files.sort();
    Ok(files)
}
