use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use business::domain::product::model::{ProductRecord, ProductRecordProps};
use business::domain::verification::errors::VerificationError;
use business::domain::verification::model::ChainVerification;
use business::domain::verification::services::ChainVerifier;

use crate::client::LedgerClient;

#[derive(Serialize)]
struct VerifyRequest<'a> {
    barcode: &'a str,
    chain: &'a str,
}

/// Ledger verifier that asks a remote service over HTTP.
///
/// Every request is bounded by the client timeout. Any non-success status or
/// transport failure is reported once, without retrying.
pub struct ChainVerifierHttp {
    client: LedgerClient,
}

impl ChainVerifierHttp {
    pub fn new(client: LedgerClient) -> Self {
        Self { client }
    }

    fn map_transport_error(err: reqwest::Error) -> VerificationError {
        if err.is_timeout() {
            VerificationError::Timeout
        } else {
            VerificationError::Network(err.to_string())
        }
    }

    /// Accepts string or numeric JSON values; anything else counts as absent.
    fn text_field(info: &Map<String, Value>, key: &str) -> Option<String> {
        match info.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    fn parse_product_info(code: &str, body: &Value) -> Result<ProductRecord, VerificationError> {
        let info = body
            .get("product_info")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                VerificationError::InvalidResponse("missing product_info object".to_string())
            })?;

        let gtin = Self::text_field(info, "gtin")
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| code.to_string());

        Ok(ProductRecord::from_props(ProductRecordProps {
            product_name: Self::text_field(info, "product_name"),
            manufacturer: Self::text_field(info, "manufacturer"),
            gtin,
            mfg_date: Self::text_field(info, "mfg_date"),
            expiry_date: Self::text_field(info, "expiry_date"),
        }))
    }
}

#[async_trait]
impl ChainVerifier for ChainVerifierHttp {
    async fn verify(&self, code: &str) -> Result<ChainVerification, VerificationError> {
        let body = VerifyRequest {
            barcode: code,
            chain: &self.client.chain,
        };

        let response = self
            .client
            .client
            .post(self.client.verify_url())
            .header("Content-Type", "application/json")
            .timeout(self.client.timeout)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            return Err(VerificationError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let data: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                VerificationError::Timeout
            } else {
                VerificationError::InvalidResponse(e.to_string())
            }
        })?;

        let product = Self::parse_product_info(code, &data)?;

        Ok(ChainVerification::verified(code, product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_CHAIN;
    use business::domain::product::model::NOT_AVAILABLE;
    use business::domain::verification::model::VerificationStatus;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::{Duration, Instant};

    fn verifier(url: &str, timeout: Duration) -> ChainVerifierHttp {
        ChainVerifierHttp::new(LedgerClient::new(url, DEFAULT_CHAIN, timeout).unwrap())
    }

    #[tokio::test]
    async fn should_return_product_when_ledger_answers_with_product_info() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/verify")
                    .json_body(json!({"barcode": "8901234567890", "chain": "polygon"}));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "product_info": {
                            "product_name": "Paracetamol 500mg",
                            "manufacturer": "Acme Pharma",
                            "mfg_date": "2024-02-01",
                            "expiry_date": "2027-02-01"
                        }
                    }));
            })
            .await;

        let result = verifier(&server.url("/verify"), Duration::from_secs(5))
            .verify("8901234567890")
            .await;

        mock.assert_async().await;
        let verification = result.unwrap();
        assert_eq!(verification.status, VerificationStatus::Verified);
        let product = verification.product.unwrap();
        assert_eq!(product.product_name, "Paracetamol 500mg");
        assert_eq!(product.gtin, "8901234567890");
        assert_eq!(product.manufacturer, "Acme Pharma");
    }

    #[tokio::test]
    async fn should_fill_missing_product_fields_with_sentinel() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/verify");
                then.status(200)
                    .json_body(json!({"product_info": {"gtin": 8901234567890u64}}));
            })
            .await;

        let verification = verifier(&server.url("/verify"), Duration::from_secs(5))
            .verify("8901234567890")
            .await
            .unwrap();

        let product = verification.product.unwrap();
        assert_eq!(product.gtin, "8901234567890");
        assert_eq!(product.product_name, NOT_AVAILABLE);
        assert_eq!(product.expiry_date, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn should_return_status_error_when_ledger_rejects_request() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/verify");
                then.status(503).body("ledger node syncing");
            })
            .await;

        let result = verifier(&server.url("/verify"), Duration::from_secs(5))
            .verify("111")
            .await;

        match result {
            Err(VerificationError::Status { status, detail }) => {
                assert_eq!(status, 503);
                assert_eq!(detail, "ledger node syncing");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_invalid_response_when_product_info_missing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/verify");
                then.status(200).json_body(json!({"status": "ok"}));
            })
            .await;

        let result = verifier(&server.url("/verify"), Duration::from_secs(5))
            .verify("111")
            .await;

        assert!(matches!(result, Err(VerificationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn should_return_invalid_response_when_body_is_not_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/verify");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let result = verifier(&server.url("/verify"), Duration::from_secs(5))
            .verify("111")
            .await;

        assert!(matches!(result, Err(VerificationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn should_time_out_within_bound_when_ledger_is_slow() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/verify");
                then.status(200)
                    .json_body(json!({"product_info": {}}))
                    .delay(Duration::from_secs(3));
            })
            .await;

        let started = Instant::now();
        let result = verifier(&server.url("/verify"), Duration::from_millis(200))
            .verify("111")
            .await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(VerificationError::Timeout)));
        assert!(elapsed < Duration::from_secs(2), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn should_return_network_error_when_ledger_unreachable() {
        // Port 9 (discard) is not served on the test host.
        let result = verifier("http://127.0.0.1:9/verify", Duration::from_secs(2))
            .verify("111")
            .await;

        assert!(matches!(
            result,
            Err(VerificationError::Network(_)) | Err(VerificationError::Timeout)
        ));
    }
}
