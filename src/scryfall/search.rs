//! Paginated search against the Scryfall card search API.
//!
//! The [`SearchClient`] issues the initial search request and follows the
//! `next_page` link chain, accumulating card records until the chain ends or
//! a result cap is reached. Any transport or status failure on any page is
//! fatal for the run: no partial result set is processed and nothing is
//! retried.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::card::CardRecord;

/// Default Scryfall API base URL.
const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// HTTP connect timeout for search requests (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout for search requests (seconds).
const READ_TIMEOUT_SECS: u64 = 60;

/// Errors from the paginated search. All of them abort the run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level error (DNS, connection refused, TLS, malformed body).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The page URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP error response from the search endpoint (4xx, 5xx).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The page URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

impl SearchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }
}

/// One page of the search response. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<CardRecord>,
    #[serde(default)]
    next_page: Option<String>,
}

/// Client for the paginated card search endpoint.
///
/// Created once per run and reused across pages for connection pooling.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Creates a search client against the public Scryfall API.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static configuration.
    /// This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a search client with a custom base URL (for testing with wiremock).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static configuration.
    /// This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = crate::http::build_client(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches every card matching `query`, in API page order.
    ///
    /// Follows the `next_page` link chain until it terminates. When `max` is
    /// `Some(n)` with `n > 0`, stops early once `n` records have accumulated
    /// and truncates the result to exactly `n`. A cap of zero or `None`
    /// means unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on any transport or status failure for any
    /// page. The error is fatal: the caller gets no partial result set.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch_all(
        &self,
        query: &str,
        max: Option<u32>,
    ) -> Result<Vec<CardRecord>, SearchError> {
        let cap = max.filter(|&m| m > 0).map(|m| m as usize);
        let mut next = Some(format!(
            "{}/cards/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        ));
        let mut cards: Vec<CardRecord> = Vec::new();

        while let Some(url) = next.take() {
            let page = self.fetch_page(&url).await?;
            debug!(url = %url, records = page.data.len(), "fetched search page");
            cards.extend(page.data);
            next = page.next_page;

            if let Some(cap) = cap
                && cards.len() >= cap
            {
                cards.truncate(cap);
                break;
            }
        }

        debug!(total = cards.len(), "search complete");
        Ok(cards)
    }

    async fn fetch_page(&self, url: &str) -> Result<SearchPage, SearchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::http_status(url, status.as_u16()));
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|e| SearchError::network(url, e))
    }
}
