//! Sequential acquisition pipeline: cards in, outcomes out.
//!
//! The engine walks the fetched card set one card at a time: the face
//! resolver yields the card's download units, the filename synthesizer names
//! each unit, the executor resolves it against the filesystem and network,
//! and every outcome is fanned out to the run log and the run tally.
//!
//! Per-unit failures (format unavailable, fetch or write errors) are
//! recovered here and never interrupt the run; only run-log IO errors
//! propagate, since a run without its audit trail is not worth continuing.

use std::path::PathBuf;

use tracing::{debug, instrument, warn};

use super::client::HttpClient;
use super::executor::{Executor, Outcome};
use super::filename::synthesize;
use super::units::units;
use crate::report::RunTally;
use crate::runlog::{LogCategory, RunLog};
use crate::scryfall::{CardRecord, ImageFormat};

/// Drives the download pipeline for one run.
#[derive(Debug)]
pub struct DownloadEngine {
    executor: Executor,
    output_dir: PathBuf,
    format: ImageFormat,
    template: String,
}

impl DownloadEngine {
    /// Creates an engine writing into `output_dir`.
    #[must_use]
    pub fn new(
        client: HttpClient,
        output_dir: PathBuf,
        format: ImageFormat,
        template: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            executor: Executor::new(client, dry_run),
            output_dir,
            format,
            template: template.into(),
        }
    }

    /// Processes every card sequentially and returns the final tally.
    ///
    /// `on_card` is invoked once after each card finishes, for progress
    /// reporting by the caller.
    ///
    /// # Errors
    ///
    /// Returns an IO error only when appending to the run log fails.
    #[instrument(skip_all, fields(cards = cards.len()))]
    pub async fn process_cards(
        &self,
        cards: &[CardRecord],
        log: &mut RunLog,
        mut on_card: impl FnMut(),
    ) -> std::io::Result<RunTally> {
        let mut tally = RunTally::new(cards.len());

        for card in cards {
            self.process_card(card, log, &mut tally).await?;
            on_card();
        }

        debug!(
            downloaded = tally.downloaded(),
            skipped = tally.skipped(),
            errors = tally.errors(),
            "run complete"
        );
        Ok(tally)
    }

    async fn process_card(
        &self,
        card: &CardRecord,
        log: &mut RunLog,
        tally: &mut RunTally,
    ) -> std::io::Result<()> {
        let unit_iter = match units(card, self.format) {
            Ok(iter) => iter,
            Err(error) => {
                warn!(card = %card.name, %error, "face resolution failed");
                let outcome = Outcome::Error(error.to_string());
                log.append(LogCategory::Errors, &error.to_string())?;
                tally.record(&outcome);
                return Ok(());
            }
        };

        for unit in unit_iter {
            let filename = synthesize(&self.template, card, self.format, unit.face, unit.rear);
            let path = self.output_dir.join(&filename);
            let outcome = self.executor.execute(unit.url, &path).await;

            match &outcome {
                Outcome::Error(cause) => {
                    warn!(card = %card.name, file = %filename, %cause, "unit failed");
                    log.append(LogCategory::Errors, &format!("{filename}: {cause}"))?;
                }
                outcome => log.append(outcome.category(), &filename)?,
            }
            tally.record(&outcome);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runlog::CategoryFilter;
    use tempfile::TempDir;

    fn engine(dir: &TempDir, dry_run: bool) -> DownloadEngine {
        DownloadEngine::new(
            HttpClient::new(),
            dir.path().to_path_buf(),
            ImageFormat::Png,
            crate::download::CANONICAL_TEMPLATE,
            dry_run,
        )
    }

    fn cards(json: &str) -> Vec<CardRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_dry_run_logs_but_counts_nothing() {
        let dir = TempDir::new().unwrap();
        let mut log = RunLog::open(dir.path(), CategoryFilter::all()).unwrap();
        let cards = cards(
            r#"[{"name": "Bolt",
                "scryfall_uri": "https://scryfall.com/card/lea/161/bolt",
                "image_uris": {"png": "http://127.0.0.1:1/bolt.png"}}]"#,
        );

        let tally = engine(&dir, true)
            .process_cards(&cards, &mut log, || {})
            .await
            .unwrap();

        assert_eq!(tally.downloaded(), 0);
        assert_eq!(tally.errors(), 0);
        let written = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(written, "[DRY-RUN] lea-161-bolt.png\n");
    }

    #[tokio::test]
    async fn test_format_unavailable_is_tallied_and_logged() {
        let dir = TempDir::new().unwrap();
        let mut log = RunLog::open(dir.path(), CategoryFilter::all()).unwrap();
        let cards = cards(
            r#"[{"name": "Bolt",
                "scryfall_uri": "https://scryfall.com/card/lea/161/bolt",
                "image_uris": {"small": "http://127.0.0.1:1/bolt.jpg"}}]"#,
        );

        let tally = engine(&dir, true)
            .process_cards(&cards, &mut log, || {})
            .await
            .unwrap();

        assert_eq!(tally.errors(), 1);
        let written = std::fs::read_to_string(log.path()).unwrap();
        assert!(written.starts_with("[ERROR]"), "in: {written}");
        assert!(written.contains("png"), "in: {written}");
    }

    #[tokio::test]
    async fn test_existing_files_are_skipped_before_any_fetch() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lea-161-bolt.png"), b"cached").unwrap();
        let mut log = RunLog::open(dir.path(), CategoryFilter::all()).unwrap();
        let cards = cards(
            r#"[{"name": "Bolt",
                "scryfall_uri": "https://scryfall.com/card/lea/161/bolt",
                "image_uris": {"png": "http://127.0.0.1:1/bolt.png"}}]"#,
        );

        let tally = engine(&dir, false)
            .process_cards(&cards, &mut log, || {})
            .await
            .unwrap();

        assert_eq!(tally.skipped(), 1);
        assert_eq!(tally.errors(), 0, "skip must preempt the unroutable fetch");
    }

    #[tokio::test]
    async fn test_on_card_fires_once_per_card() {
        let dir = TempDir::new().unwrap();
        let mut log = RunLog::open(dir.path(), CategoryFilter::all()).unwrap();
        let cards = cards(r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}]"#);

        let mut ticks = 0;
        engine(&dir, true)
            .process_cards(&cards, &mut log, || ticks += 1)
            .await
            .unwrap();
        assert_eq!(ticks, 3);
    }
}
