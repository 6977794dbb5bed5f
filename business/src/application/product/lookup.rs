use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::product::registry::ProductRegistry;
use crate::domain::product::use_cases::lookup::{LookupProductParams, LookupProductUseCase};

pub struct LookupProductUseCaseImpl {
    pub registry: Arc<dyn ProductRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupProductUseCase for LookupProductUseCaseImpl {
    async fn execute(&self, params: LookupProductParams) -> Result<ProductRecord, ProductError> {
        let code = params.code.trim();
        if code.is_empty() {
            return Err(ProductError::CodeEmpty);
        }

        // An empty registry means "no data", not "unknown code".
        if self.registry.is_empty() {
            self.logger.warn(&format!(
                "[session {}] Lookup of {} skipped: registry has no data",
                params.session.id, code
            ));
            return Err(ProductError::RegistryUnavailable);
        }

        self.logger.info(&format!(
            "[session {}] Looking up product by code: {}",
            params.session.id, code
        ));

        let record = self.registry.lookup(code).ok_or_else(|| {
            self.logger
                .info(&format!("[session {}] No product for code {}", params.session.id, code));
            ProductError::CodeNotFound
        })?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductRecordProps;
    use crate::domain::session::model::{InputMethod, SessionContext};
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub Registry {}

        impl ProductRegistry for Registry {
            fn lookup(&self, code: &str) -> Option<ProductRecord>;
            fn len(&self) -> usize;
            fn is_empty(&self) -> bool;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(code: &str) -> LookupProductParams {
        LookupProductParams {
            session: SessionContext::new(SessionId::new("session-1"), InputMethod::Manual),
            code: code.to_string(),
        }
    }

    fn amoxicillin() -> ProductRecord {
        ProductRecord::from_props(ProductRecordProps {
            product_name: Some("Amoxicillin 250mg".to_string()),
            manufacturer: Some("Acme Pharma".to_string()),
            gtin: "111".to_string(),
            mfg_date: Some("2024-03-01".to_string()),
            expiry_date: Some("2026-03-01".to_string()),
        })
    }

    #[tokio::test]
    async fn should_return_record_when_code_is_registered() {
        let mut registry = MockRegistry::new();
        registry.expect_is_empty().returning(|| false);
        registry
            .expect_lookup()
            .withf(|code| code == "111")
            .times(1)
            .returning(|_| Some(amoxicillin()));

        let use_case = LookupProductUseCaseImpl {
            registry: Arc::new(registry),
            logger: mock_logger(),
        };

        let record = use_case.execute(params(" 111 ")).await.unwrap();
        assert_eq!(record.product_name, "Amoxicillin 250mg");
        assert_eq!(record.gtin, "111");
    }

    #[tokio::test]
    async fn should_return_code_not_found_when_code_is_unknown() {
        let mut registry = MockRegistry::new();
        registry.expect_is_empty().returning(|| false);
        registry.expect_lookup().returning(|_| None);

        let use_case = LookupProductUseCaseImpl {
            registry: Arc::new(registry),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("333")).await;
        assert!(matches!(result, Err(ProductError::CodeNotFound)));
    }

    #[tokio::test]
    async fn should_return_registry_unavailable_when_registry_is_empty() {
        let mut registry = MockRegistry::new();
        registry.expect_is_empty().returning(|| true);
        registry.expect_lookup().never();

        let use_case = LookupProductUseCaseImpl {
            registry: Arc::new(registry),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("111")).await;
        assert!(matches!(result, Err(ProductError::RegistryUnavailable)));
    }

    #[tokio::test]
    async fn should_return_code_empty_when_code_is_blank() {
        let mut registry = MockRegistry::new();
        registry.expect_is_empty().never();
        registry.expect_lookup().never();

        let use_case = LookupProductUseCaseImpl {
            registry: Arc::new(registry),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ")).await;
        assert!(matches!(result, Err(ProductError::CodeEmpty)));
    }
}
