use std::time::Duration;

use reqwest::Client;
use url::Url;

pub const DEFAULT_CHAIN: &str = "polygon";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum LedgerClientError {
    #[error("ledger.invalid_endpoint")]
    InvalidEndpoint(String),
    #[error("ledger.client_build_failed")]
    ClientBuild(String),
}

/// Shared HTTP client configuration for the ledger verification service.
pub struct LedgerClient {
    pub client: Client,
    pub endpoint: Url,
    pub chain: String,
    pub timeout: Duration,
}

impl LedgerClient {
    pub fn new(
        endpoint: &str,
        chain: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LedgerClientError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| LedgerClientError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(LedgerClientError::InvalidEndpoint(format!(
                "unsupported scheme: {}",
                endpoint.scheme()
            )));
        }

        let client = build_http_client(timeout)?;

        Ok(Self {
            client,
            endpoint,
            chain: chain.into(),
            timeout,
        })
    }

    /// Returns the verification endpoint URL.
    pub fn verify_url(&self) -> Url {
        self.endpoint.clone()
    }
}

/// HTTP client whose every request is bounded by `timeout`.
fn build_http_client(timeout: Duration) -> Result<Client, LedgerClientError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LedgerClientError::ClientBuild(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_http_endpoint() {
        let client =
            LedgerClient::new("https://ledger.example/verify", DEFAULT_CHAIN, DEFAULT_TIMEOUT)
                .unwrap();

        assert_eq!(client.verify_url().as_str(), "https://ledger.example/verify");
        assert_eq!(client.chain, "polygon");
        assert_eq!(client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_reject_malformed_endpoint() {
        let result = LedgerClient::new("not a url", DEFAULT_CHAIN, DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(LedgerClientError::InvalidEndpoint(_))));
    }

    #[test]
    fn should_reject_non_http_scheme() {
        let result = LedgerClient::new("ftp://ledger.example/verify", DEFAULT_CHAIN, DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(LedgerClientError::InvalidEndpoint(_))));
    }

    #[test]
    fn should_build_http_client_with_timeout() {
        assert!(build_http_client(Duration::from_millis(250)).is_ok());
    }

    #[test]
    fn should_report_client_build_failure_with_code_style_message() {
        let err = LedgerClientError::ClientBuild("tls backend unavailable".to_string());

        assert_eq!(err.to_string(), "ledger.client_build_failed");
    }
}
