use async_trait::async_trait;

use crate::domain::barcode::errors::BarcodeError;
use crate::domain::session::model::SessionContext;
use crate::domain::shared::value_objects::ImagePayload;

/// Input of one "verify barcode" interaction. Which field is read depends on
/// the session's input method.
pub struct ResolveCodeParams {
    pub session: SessionContext,
    pub manual_code: Option<String>,
    pub image: Option<ImagePayload>,
}

#[async_trait]
pub trait ResolveCodeUseCase: Send + Sync {
    /// Returns the session with `last_decoded` set to the resolved code.
    async fn execute(&self, params: ResolveCodeParams) -> Result<SessionContext, BarcodeError>;
}
