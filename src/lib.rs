//! Scryfaller Core Library
//!
//! This library implements the acquisition pipeline behind the `scryfaller`
//! tool, which fetches card metadata from the Scryfall search API and
//! materializes one or more image files per result.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`scryfall`] - API data model and paginated search client
//! - [`download`] - face resolution, filename synthesis, and the download engine
//! - [`runlog`] - size-bounded categorized activity log
//! - [`report`] - run-level outcome aggregation
//! - [`app_config`] - persisted `config.json` defaults

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app_config;
pub mod download;
pub(crate) mod http;
pub mod report;
pub mod runlog;
pub mod scryfall;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use app_config::{CONFIG_FILE, FileConfig, load_or_create};
pub use download::{
    CANONICAL_TEMPLATE, DownloadEngine, DownloadError, DownloadUnit, Executor, HttpClient,
    Outcome, ResolveError, synthesize, units,
};
pub use report::{RunTally, Summary};
pub use runlog::{CategoryFilter, LOG_FILE_NAME, LOG_MAX_LINES, LogCategory, RunLog};
pub use scryfall::{CardFace, CardRecord, ImageFormat, SearchClient, SearchError};
