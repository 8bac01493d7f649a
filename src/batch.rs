// src/batch.rs

use anyhow::Result;
use tracing::{error, info, warn};

use crate::{config::Config, normalize, scan};

/// How a batch run ended. The operator-facing surface is the log; this is
/// for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Source directory does not exist. Reported, no work done.
    MissingDir,
    /// Directory exists but holds no `*.csv` files. Reported, no work done.
    NoCsvFiles,
    Completed { processed: usize, failed: usize },
}

/// Run the batch: scan the configured directory and normalize each CSV file
/// in turn. A failure in one file is logged and skipped; it never aborts the
/// rest of the batch.
pub fn fill_blank_cells(cfg: &Config) -> Result<BatchOutcome> {
    let dir = &cfg.data_dir;
    if !dir.exists() {
        error!("directory {} does not exist", dir.display());
        return Ok(BatchOutcome::MissingDir);
    }

    // Snapshot the listing up front so outputs written below are not
    // picked up mid-batch.
    let files = scan::csv_files(dir)?;
    if files.is_empty() {
        warn!("no CSV files found in {}", dir.display());
        return Ok(BatchOutcome::NoCsvFiles);
    }
    info!("{} CSV files to process", files.len());

    let mut processed = 0;
    let mut failed = 0;
    for path in &files {
        match normalize::normalize_file(path, &cfg.normalize) {
            Ok(out) => {
                info!(
                    "filled blank cells in {} and saved to {}",
                    path.display(),
                    out.display()
                );
                processed += 1;
            }
            Err(e) => {
                error!("error processing {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!(processed, failed, "completed filling blank cells for all CSV files");
    Ok(BatchOutcome::Completed { processed, failed })
}
