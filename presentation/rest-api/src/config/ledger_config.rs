use ledger::client::{DEFAULT_CHAIN, DEFAULT_TIMEOUT};
use std::env;
use std::time::Duration;

/// Configuration for the remote ledger verification service.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Verification endpoint. `None` selects the placeholder verifier.
    pub api_url: Option<String>,
    pub chain: String,
    pub timeout: Duration,
}

impl LedgerConfig {
    /// Load ledger configuration from environment variables
    ///
    /// Environment variables:
    /// - LEDGER_API_URL: verification endpoint (unset: placeholder verifier)
    /// - LEDGER_TIMEOUT_SECS: request timeout in seconds (default: 10)
    /// - LEDGER_CHAIN: chain name sent with each request (default: "polygon")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("LEDGER_API_URL").ok(),
            env::var("LEDGER_TIMEOUT_SECS").ok(),
            env::var("LEDGER_CHAIN").ok(),
        )
    }

    fn from_values(
        api_url: Option<String>,
        timeout_secs: Option<String>,
        chain: Option<String>,
    ) -> Self {
        Self {
            api_url: api_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            chain: chain
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
            timeout: parse_timeout(timeout_secs.as_deref()),
        }
    }
}

/// Whole seconds; zero, negative or unparsable values fall back to the default.
pub fn parse_timeout(raw: Option<&str>) -> Duration {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}
