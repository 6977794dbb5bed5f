use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::registry::ProductRegistryJson;
use persistence::source::RegistrySourceConfig;
use vision::barcode_reader::ImageBarcodeReader;
use vision::placeholder_oracle::PlaceholderAuthenticityOracle;

use ledger::chain_verifier::ChainVerifierHttp;
use ledger::client::LedgerClient;
use ledger::placeholder_verifier::ChainVerifierPlaceholder;

use business::application::authenticity::classify::ClassifyImageUseCaseImpl;
use business::application::barcode::decode::DecodeBarcodeUseCaseImpl;
use business::application::product::lookup::LookupProductUseCaseImpl;
use business::application::session::resolve_code::ResolveCodeUseCaseImpl;
use business::application::verification::verify::VerifyRemoteUseCaseImpl;
use business::domain::authenticity::services::AuthenticityOracle;
use business::domain::barcode::services::BarcodeReader;
use business::domain::logger::Logger;
use business::domain::product::registry::ProductRegistry;
use business::domain::verification::services::ChainVerifier;

use crate::config::app_config::AppConfig;
use crate::config::ledger_config::LedgerConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub barcode_api: crate::api::barcode::routes::BarcodeApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub authenticity_api: crate::api::authenticity::routes::AuthenticityApi,
    pub verification_api: crate::api::verification::routes::VerificationApi,
}

/// Adapters behind the domain ports.
pub struct Adapters {
    pub registry: Arc<dyn ProductRegistry>,
    pub reader: Arc<dyn BarcodeReader>,
    pub oracle: Arc<dyn AuthenticityOracle>,
    pub verifier: Arc<dyn ChainVerifier>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let adapters = Adapters {
            registry: load_registry(&config.registry, logger.as_ref()),
            reader: Arc::new(ImageBarcodeReader::new()),
            oracle: Arc::new(PlaceholderAuthenticityOracle::new()),
            verifier: build_verifier(&config.ledger, logger.as_ref()),
            logger,
        };

        Self::from_adapters(adapters)
    }

    pub fn from_adapters(adapters: Adapters) -> Self {
        let Adapters {
            registry,
            reader,
            oracle,
            verifier,
            logger,
        } = adapters;

        let health_api = crate::api::health::routes::Api::new(registry.clone());

        // Use cases
        let decode_use_case = Arc::new(DecodeBarcodeUseCaseImpl {
            reader: reader.clone(),
            logger: logger.clone(),
        });
        let resolve_code_use_case = Arc::new(ResolveCodeUseCaseImpl {
            reader,
            logger: logger.clone(),
        });
        let lookup_use_case = Arc::new(LookupProductUseCaseImpl {
            registry,
            logger: logger.clone(),
        });
        let classify_use_case = Arc::new(ClassifyImageUseCaseImpl {
            oracle,
            logger: logger.clone(),
        });
        let verify_remote_use_case = Arc::new(VerifyRemoteUseCaseImpl { verifier, logger });

        let barcode_api = crate::api::barcode::routes::BarcodeApi::new(decode_use_case);
        let product_api = crate::api::product::routes::ProductApi::new(
            lookup_use_case,
            resolve_code_use_case,
            verify_remote_use_case.clone(),
        );
        let authenticity_api =
            crate::api::authenticity::routes::AuthenticityApi::new(classify_use_case);
        let verification_api =
            crate::api::verification::routes::VerificationApi::new(verify_remote_use_case);

        Self {
            health_api,
            barcode_api,
            product_api,
            authenticity_api,
            verification_api,
        }
    }
}

/// Loads the registry file. Any failure is logged and leaves the service
/// running on an empty registry, which lookups report as "no data".
fn load_registry(source: &RegistrySourceConfig, logger: &dyn Logger) -> Arc<dyn ProductRegistry> {
    match ProductRegistryJson::load(source) {
        Ok(registry) => {
            if registry.is_empty() {
                logger.warn(&format!(
                    "Registry {} is empty; lookups will report no data",
                    source.path().display()
                ));
            } else {
                logger.info(&format!(
                    "Loaded {} products from {}",
                    registry.len(),
                    source.path().display()
                ));
            }
            Arc::new(registry)
        }
        Err(err) => {
            logger.error(&format!(
                "Failed to load registry {}: {} {}",
                source.path().display(),
                err,
                err.detail().unwrap_or_default()
            ));
            Arc::new(ProductRegistryJson::empty())
        }
    }
}

/// The HTTP verifier when an endpoint is configured, the placeholder
/// otherwise or when the client cannot be built.
fn build_verifier(config: &LedgerConfig, logger: &dyn Logger) -> Arc<dyn ChainVerifier> {
    let Some(url) = config.api_url.as_deref() else {
        logger.info("LEDGER_API_URL not set; remote verification is a placeholder");
        return Arc::new(ChainVerifierPlaceholder::new());
    };

    match LedgerClient::new(url, config.chain.clone(), config.timeout) {
        Ok(client) => {
            logger.info(&format!(
                "Remote verification via {} (chain {}, timeout {}s)",
                client.endpoint,
                client.chain,
                client.timeout.as_secs()
            ));
            Arc::new(ChainVerifierHttp::new(client))
        }
        Err(err) => {
            logger.error(&format!(
                "Ledger client unavailable, falling back to placeholder: {:?}",
                err
            ));
            Arc::new(ChainVerifierPlaceholder::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    #[test]
    fn should_fall_back_to_empty_registry_when_file_is_missing() {
        let source = RegistrySourceConfig::new("/nonexistent/medchain/products.json");

        let registry = load_registry(&source, &SilentLogger);

        assert!(registry.is_empty());
    }

    #[test]
    fn should_fall_back_to_empty_registry_when_file_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let registry = load_registry(&RegistrySourceConfig::new(file.path()), &SilentLogger);

        assert!(registry.is_empty());
    }

    #[test]
    fn should_load_registry_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Aspirin": {{"gtin": "111", "product_name": "Aspirin"}}}}"#
        )
        .unwrap();

        let registry = load_registry(&RegistrySourceConfig::new(file.path()), &SilentLogger);

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("111").is_some());
    }

    #[tokio::test]
    async fn should_use_placeholder_verifier_when_url_is_invalid() {
        let config = LedgerConfig {
            api_url: Some("ftp://ledger.example".to_string()),
            chain: "polygon".to_string(),
            timeout: Duration::from_secs(1),
        };

        let verifier = build_verifier(&config, &SilentLogger);
        let result = verifier.verify("111").await.unwrap();

        assert!(result.product.is_none());
        assert!(result.message.is_some());
    }
}
