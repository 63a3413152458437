//! Run-scoped rotating activity log.
//!
//! A single append-only, category-tagged log file lives inside the output
//! directory. When a run opens the log and the file has already reached the
//! line cap, it is truncated to empty; otherwise existing content is kept
//! and new lines are appended. Each append is newline-terminated and flushed
//! so an aborted run still leaves a durable trail.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Fixed name of the log file inside the output directory.
pub const LOG_FILE_NAME: &str = "scryfaller.log";

/// Line-count cap; reaching it resets the file on the next open.
pub const LOG_MAX_LINES: usize = 10_000;

/// Category tag attached to each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// Successful downloads.
    Ok,
    /// Targets skipped because the file already existed.
    Skipped,
    /// Units resolved under dry-run.
    DryRun,
    /// Per-unit and per-card failures.
    Errors,
}

impl LogCategory {
    /// The bracketed tag written at the start of a log line.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Skipped => "SKIP",
            Self::DryRun => "DRY-RUN",
            Self::Errors => "ERROR",
        }
    }

    /// The configuration name matched against the active-category list.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Skipped => "skipped",
            Self::DryRun => "dry-run",
            Self::Errors => "errors",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Active-category set parsed from a comma-separated configuration value.
///
/// The `all` wildcard admits every category. Unknown tags are retained but
/// never match a produced category.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    active: Vec<String>,
}

impl CategoryFilter {
    /// Parses a comma-separated category list, e.g. `"errors,skipped"`.
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped. An
    /// entirely empty input yields a filter that admits nothing.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let active = list
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { active }
    }

    /// Filter admitting every category.
    #[must_use]
    pub fn all() -> Self {
        Self::parse("all")
    }

    /// Whether lines in `category` should be written.
    #[must_use]
    pub fn allows(&self, category: LogCategory) -> bool {
        self.active
            .iter()
            .any(|entry| entry == "all" || entry == category.name())
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Append-only categorized log with a hard line-count cap.
///
/// Opened once per run and flushed on every append, including early-abort
/// exit paths.
#[derive(Debug)]
pub struct RunLog {
    file: File,
    filter: CategoryFilter,
    path: PathBuf,
}

impl RunLog {
    /// Opens (and if needed rotates) the run log inside `dir`.
    ///
    /// Creates the file empty when absent. When the existing file has
    /// reached [`LOG_MAX_LINES`], truncates it to empty before appending.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, truncated, or opened
    /// for appending.
    pub fn open(dir: &Path, filter: CategoryFilter) -> io::Result<Self> {
        let path = dir.join(LOG_FILE_NAME);

        if path.exists() {
            let existing = fs::read_to_string(&path)?;
            if existing.lines().count() >= LOG_MAX_LINES {
                debug!(path = %path.display(), "log reached line cap, rotating");
                fs::write(&path, "")?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file, filter, path })
    }

    /// Appends one tagged line when the category is active.
    ///
    /// The message is trimmed and newline-terminated; the write is flushed
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the write or flush fails.
    pub fn append(&mut self, category: LogCategory, message: &str) -> io::Result<()> {
        if !self.filter.allows(category) {
            return Ok(());
        }
        writeln!(self.file, "[{}] {}", category.tag(), message.trim())?;
        self.file.flush()
    }

    /// Path of the underlying log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
