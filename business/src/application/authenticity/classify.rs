use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::authenticity::errors::AuthenticityError;
use crate::domain::authenticity::model::AuthenticityVerdict;
use crate::domain::authenticity::services::AuthenticityOracle;
use crate::domain::authenticity::use_cases::classify::{ClassifyImageParams, ClassifyImageUseCase};
use crate::domain::logger::Logger;

pub struct ClassifyImageUseCaseImpl {
    pub oracle: Arc<dyn AuthenticityOracle>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClassifyImageUseCase for ClassifyImageUseCaseImpl {
    async fn execute(
        &self,
        params: ClassifyImageParams,
    ) -> Result<AuthenticityVerdict, AuthenticityError> {
        self.logger.info(&format!(
            "Classifying product image {}",
            params.image.fingerprint()
        ));

        let verdict = self.oracle.classify(&params.image).inspect_err(|e| {
            self.logger
                .warn(&format!("Classification of {} failed: {}", params.image.fingerprint(), e));
        })?;

        if !verdict.authoritative {
            self.logger.debug("Verdict comes from a placeholder classifier");
        }

        self.logger.info(&format!(
            "Product image classified as {} (confidence: {:.2})",
            verdict.label, verdict.confidence
        ));

        Ok(verdict)
    }
}
