//! CLI entry point for the scryfaller tool.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use scryfaller::{CONFIG_FILE, DownloadEngine, HttpClient, RunLog, SearchClient, Summary};
use tracing::{debug, info};

mod cli;
mod progress;

use cli::{Args, RunSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = scryfaller::load_or_create(Path::new(CONFIG_FILE))?;
    let settings = RunSettings::resolve(args, &config);

    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "failed to create output folder '{}'",
            settings.output_dir.display()
        )
    })?;

    let mut log = RunLog::open(&settings.output_dir, settings.log_filter.clone())
        .with_context(|| {
            format!(
                "failed to open run log in '{}'",
                settings.output_dir.display()
            )
        })?;

    // Pagination failures are fatal: surface them, process no partial set.
    let cards = SearchClient::new()
        .fetch_all(&settings.query, settings.max)
        .await
        .context("search failed")?;
    info!(cards = cards.len(), query = %settings.query, "search complete");

    let engine = DownloadEngine::new(
        HttpClient::new(),
        settings.output_dir.clone(),
        settings.format,
        settings.template.clone(),
        settings.dry_run,
    );

    let bar = progress::card_progress_bar(cards.len() as u64, settings.quiet);
    let tally = engine
        .process_cards(&cards, &mut log, || bar.inc(1))
        .await
        .context("failed to write the run log")?;
    bar.finish_and_clear();

    if !settings.quiet {
        println!("{}", Summary::new(&tally, settings.dry_run));
    }

    Ok(())
}
