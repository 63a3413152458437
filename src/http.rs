//! Shared `reqwest` client construction.
//!
//! Both the search client and the image downloader want the same base
//! configuration (gzip, crate user agent, explicit timeouts), differing only
//! in how long they are willing to wait for a body.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

/// Builds a `reqwest` client with the shared base configuration.
///
/// # Errors
///
/// Returns the underlying `reqwest` error if the builder fails, which only
/// happens when TLS initialization fails.
pub(crate) fn build_client(
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(read_timeout_secs))
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_succeeds_with_defaults() {
        assert!(build_client(30, 60).is_ok());
    }
}
