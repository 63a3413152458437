//! Image acquisition pipeline.
//!
//! For each fetched card, the face resolver ([`units`]) yields one or two
//! download units, the filename synthesizer ([`synthesize`]) names each unit,
//! and the executor resolves it against the filesystem and network. The
//! [`DownloadEngine`] strings these together sequentially, one card and one
//! unit at a time.

mod client;
mod engine;
mod error;
mod executor;
mod filename;
mod units;

pub use client::HttpClient;
pub use engine::DownloadEngine;
pub use error::DownloadError;
pub use executor::{Executor, Outcome};
pub use filename::{CANONICAL_TEMPLATE, synthesize};
pub use units::{DownloadUnit, ResolveError, UnitIter, units};
