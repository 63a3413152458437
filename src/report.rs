//! Run-level outcome aggregation and summary rendering.

use std::fmt;

use crate::download::Outcome;

/// Counters for one run, updated once per terminal outcome.
///
/// Dry-run outcomes are logged but deliberately not counted as downloads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunTally {
    requested: usize,
    downloaded: usize,
    skipped: usize,
    errors: usize,
}

impl RunTally {
    /// Creates a tally for a run over `requested` fetched cards.
    #[must_use]
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    /// Records one terminal outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Downloaded => self.downloaded += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Error(_) => self.errors += 1,
            Outcome::DryRun => {}
        }
    }

    /// Number of cards the run set out to process.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of successfully written images.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Number of targets skipped because the file already existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of per-unit and per-card failures.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }
}

/// Human-readable end-of-run summary.
///
/// Rendered by the binary unless quiet; appends a dry-run notice when the
/// run performed no fetches.
#[derive(Debug)]
pub struct Summary<'a> {
    tally: &'a RunTally,
    dry_run: bool,
}

impl<'a> Summary<'a> {
    /// Wraps a tally for display.
    #[must_use]
    pub fn new(tally: &'a RunTally, dry_run: bool) -> Self {
        Self { tally, dry_run }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results ({} cards):", self.tally.requested())?;
        writeln!(f, "  downloaded: {}", self.tally.downloaded())?;
        writeln!(f, "  skipped:    {}", self.tally.skipped())?;
        write!(f, "  errors:     {}", self.tally.errors())?;
        if self.dry_run {
            write!(f, "\n  [dry-run active: no files were written]")?;
        }
        Ok(())
    }
}
