//! Shared User-Agent string for search and image HTTP clients.

/// Default User-Agent identifying the tool and its version.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("scryfaller/{version}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_contains_name_and_version() {
        let ua = default_user_agent();
        assert!(ua.starts_with("scryfaller/"), "unexpected UA: {ua}");
        assert_eq!(
            ua.strip_prefix("scryfaller/").unwrap(),
            env!("CARGO_PKG_VERSION")
        );
    }
}
