// src/logging.rs

use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, LogDestination};

/// Install the global subscriber described by `cfg`: a level filter plus an
/// fmt layer per destination. The file layer appends, so successive runs
/// share one log like the rest of the tooling. Fails if a subscriber is
/// already installed.
pub fn init(cfg: &LogConfig) -> Result<()> {
    // The filter comes from the config, never from the environment.
    let filter = EnvFilter::new(cfg.min_level.directive());
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.destination {
        LogDestination::Console => {
            registry.with(fmt::layer()).try_init()?;
        }
        LogDestination::File => {
            let file = open_log_file(&cfg.file_path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .try_init()?;
        }
        LogDestination::Both => {
            let file = open_log_file(&cfg.file_path)?;
            registry
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .try_init()?;
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
