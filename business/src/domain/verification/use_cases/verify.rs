use async_trait::async_trait;

use crate::domain::session::model::SessionContext;
use crate::domain::verification::errors::VerificationError;
use crate::domain::verification::model::ChainVerification;

pub struct VerifyRemoteParams {
    pub session: SessionContext,
    pub code: String,
}

#[async_trait]
pub trait VerifyRemoteUseCase: Send + Sync {
    async fn execute(
        &self,
        params: VerifyRemoteParams,
    ) -> Result<ChainVerification, VerificationError>;
}
