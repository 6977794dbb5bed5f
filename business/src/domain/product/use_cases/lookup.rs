use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::session::model::SessionContext;

pub struct LookupProductParams {
    pub session: SessionContext,
    pub code: String,
}

#[async_trait]
pub trait LookupProductUseCase: Send + Sync {
    async fn execute(&self, params: LookupProductParams) -> Result<ProductRecord, ProductError>;
}
