use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::verification::errors::VerificationError;
use crate::domain::verification::model::ChainVerification;
use crate::domain::verification::services::ChainVerifier;
use crate::domain::verification::use_cases::verify::{VerifyRemoteParams, VerifyRemoteUseCase};

pub struct VerifyRemoteUseCaseImpl {
    pub verifier: Arc<dyn ChainVerifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyRemoteUseCase for VerifyRemoteUseCaseImpl {
    async fn execute(
        &self,
        params: VerifyRemoteParams,
    ) -> Result<ChainVerification, VerificationError> {
        let code = params.code.trim();
        if code.is_empty() {
            return Err(VerificationError::CodeEmpty);
        }

        self.logger.info(&format!(
            "[session {}] Verifying code {} against ledger",
            params.session.id, code
        ));

        match self.verifier.verify(code).await {
            Ok(verification) => {
                self.logger.info(&format!(
                    "[session {}] Ledger answered {} for {}",
                    params.session.id, verification.status, code
                ));
                Ok(verification)
            }
            Err(err) => {
                self.logger.error(&format!(
                    "[session {}] Ledger verification of {} failed: {} {}",
                    params.session.id,
                    code,
                    err,
                    err.detail().unwrap_or_default()
                ));
                Err(err)
            }
        }
    }
}
