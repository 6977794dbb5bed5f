use async_trait::async_trait;

use crate::domain::authenticity::errors::AuthenticityError;
use crate::domain::authenticity::model::AuthenticityVerdict;
use crate::domain::shared::value_objects::ImagePayload;

pub struct ClassifyImageParams {
    pub image: ImagePayload,
}

#[async_trait]
pub trait ClassifyImageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ClassifyImageParams,
    ) -> Result<AuthenticityVerdict, AuthenticityError>;
}
