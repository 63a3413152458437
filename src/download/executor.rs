//! Per-unit download execution: skip, dry-run, or fetch-and-write.

use std::path::Path;

use tracing::debug;

use super::client::HttpClient;
use crate::runlog::LogCategory;

/// Terminal result of executing one download unit.
///
/// Produced once per unit, consumed exactly once by the run log and the
/// run tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was fetched and written.
    Downloaded,
    /// The target path already existed; no network access occurred.
    Skipped,
    /// Dry-run mode: no network access, no write.
    DryRun,
    /// The fetch or write failed; carries the human-readable cause.
    Error(String),
}

impl Outcome {
    /// The log category this outcome is filed under.
    #[must_use]
    pub fn category(&self) -> LogCategory {
        match self {
            Self::Downloaded => LogCategory::Ok,
            Self::Skipped => LogCategory::Skipped,
            Self::DryRun => LogCategory::DryRun,
            Self::Error(_) => LogCategory::Errors,
        }
    }
}

/// Resolves one named unit against the filesystem and the network.
#[derive(Debug, Clone)]
pub struct Executor {
    client: HttpClient,
    dry_run: bool,
}

impl Executor {
    /// Creates an executor over a shared HTTP client.
    #[must_use]
    pub fn new(client: HttpClient, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    /// Executes one unit against its resolved target path.
    ///
    /// The path-existence check precedes everything else: it is the run's
    /// sole cross-run deduplication mechanism and it guarantees a given path
    /// is written at most once per run. Dry-run short-circuits before any
    /// network access. A single fetch is attempted; failures are rendered
    /// into [`Outcome::Error`] and never escalate.
    pub async fn execute(&self, url: &str, path: &Path) -> Outcome {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            debug!(path = %path.display(), "target exists, skipping");
            return Outcome::Skipped;
        }
        if self.dry_run {
            return Outcome::DryRun;
        }
        match self.client.fetch_to_file(url, path).await {
            Ok(()) => Outcome::Downloaded,
            Err(error) => Outcome::Error(error.to_string()),
        }
    }
}
