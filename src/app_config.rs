//! Persisted configuration: `config.json` in the working directory.
//!
//! The file is auto-created with documented defaults when absent. A file
//! that exists but cannot be read or parsed falls back to the defaults with
//! a warning rather than aborting the run. CLI-supplied values always take
//! precedence over what the file says; that merge happens in the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::runlog::CategoryFilter;
use crate::scryfall::ImageFormat;

/// Fixed configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persisted defaults for a run. Every field can be overridden on the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory the images and the run log are written into.
    pub output_folder: PathBuf,
    /// Result cap; `null` or `0` means unbounded.
    pub max: Option<u32>,
    /// Resolve and log everything but fetch and write nothing.
    pub dry_run: bool,
    /// Requested image format.
    pub format: ImageFormat,
    /// Filename template; `{original}` selects canonical mode.
    pub filename: String,
    /// Suppress progress and the final summary.
    pub quiet: bool,
    /// Comma-separated active log categories.
    pub log_level: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("images"),
            max: None,
            dry_run: false,
            format: ImageFormat::Png,
            filename: crate::download::CANONICAL_TEMPLATE.to_string(),
            quiet: false,
            log_level: "all".to_string(),
        }
    }
}

impl FileConfig {
    /// Parses the configured log categories into a filter.
    #[must_use]
    pub fn log_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(&self.log_level)
    }
}

/// Loads `path`, creating it with defaults when absent.
///
/// An unreadable or unparseable existing file degrades to the defaults with
/// a warning; only a failure to *create* the missing file is an error, since
/// that points at a broken working directory.
///
/// # Errors
///
/// Returns an error if the default config file cannot be written.
pub fn load_or_create(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        let defaults = FileConfig::default();
        let rendered = serde_json::to_string_pretty(&defaults)
            .context("failed to serialize default configuration")?;
        fs::write(path, rendered + "\n")
            .with_context(|| format!("failed to create config file '{}'", path.display()))?;
        info!(path = %path.display(), "created default configuration file");
        return Ok(defaults);
    }

    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid config file, using defaults");
                Ok(FileConfig::default())
            }
        },
        Err(error) => {
            warn!(path = %path.display(), %error, "unreadable config file, using defaults");
            Ok(FileConfig::default())
        }
    }
}
