//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use scryfaller::{CategoryFilter, FileConfig, ImageFormat};

/// Batch download Magic card images from the Scryfall search API.
///
/// Scryfaller runs one search, follows its pages, and writes one image per
/// card face into the output folder. Re-runs skip files that already exist.
#[derive(Parser, Debug, Clone)]
#[command(name = "scryfaller")]
#[command(author, version, about)]
pub struct Args {
    /// Scryfall search query (quote it), e.g. "set:lea t:instant"
    pub query: String,

    /// Output folder for images and the run log
    #[arg(long, visible_alias = "of")]
    pub output_folder: Option<PathBuf>,

    /// Maximum number of results to process (0 = unbounded)
    #[arg(long)]
    pub max: Option<u32>,

    /// Resolve and log everything, but fetch and write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Image format to download
    #[arg(long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Filename template: {original}, or any of {name} {set_code} {number} {face} {format}
    #[arg(long)]
    pub filename: Option<String>,

    /// Suppress progress output and the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Comma-separated active log categories (all, ok, skipped, dry-run, errors)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Increase diagnostic verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings for one run: CLI values over file-config values.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub query: String,
    pub output_dir: PathBuf,
    pub max: Option<u32>,
    pub dry_run: bool,
    pub format: ImageFormat,
    pub template: String,
    pub quiet: bool,
    pub log_filter: CategoryFilter,
}

impl RunSettings {
    /// Merges CLI arguments over persisted configuration, field by field.
    ///
    /// Flags merge with `or`: `--dry-run`/`--quiet` force the behavior on,
    /// while their absence defers to the config file.
    #[must_use]
    pub fn resolve(args: Args, config: &FileConfig) -> Self {
        let log_filter = args
            .log_level
            .as_deref()
            .map_or_else(|| config.log_filter(), CategoryFilter::parse);
        Self {
            query: args.query,
            output_dir: args
                .output_folder
                .unwrap_or_else(|| config.output_folder.clone()),
            max: args.max.or(config.max),
            dry_run: args.dry_run || config.dry_run,
            format: args.format.unwrap_or(config.format),
            template: args.filename.unwrap_or_else(|| config.filename.clone()),
            quiet: args.quiet || config.quiet,
            log_filter,
        }
    }
}
