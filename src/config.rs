// src/config.rs

use std::path::PathBuf;

use crate::normalize::NormalizeOptions;

/// Directory scanned for CSV files.
static DEFAULT_DATA_DIR: &str = "./data";

static DEFAULT_LOG_FILE: &str = "fill_blanks.log";

/// Everything the batch needs, fixed at construction time. There is no CLI
/// or environment surface; `main` builds the default and runs with it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose `*.csv` files get normalized.
    pub data_dir: PathBuf,
    pub normalize: NormalizeOptions,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            normalize: NormalizeOptions::default(),
            log: LogConfig::default(),
        }
    }
}

/// Reporter settings, consumed once by `logging::init`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub min_level: LogLevel,
    /// Only consulted when `destination` includes a file.
    pub file_path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::Both,
            min_level: LogLevel::Info,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Console,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}
