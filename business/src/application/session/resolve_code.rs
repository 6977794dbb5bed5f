use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::barcode::errors::BarcodeError;
use crate::domain::barcode::model::BarcodeSymbol;
use crate::domain::barcode::services::BarcodeReader;
use crate::domain::logger::Logger;
use crate::domain::session::model::{InputMethod, SessionContext};
use crate::domain::session::use_cases::resolve_code::{ResolveCodeParams, ResolveCodeUseCase};

pub struct ResolveCodeUseCaseImpl {
    pub reader: Arc<dyn BarcodeReader>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveCodeUseCase for ResolveCodeUseCaseImpl {
    async fn execute(&self, params: ResolveCodeParams) -> Result<SessionContext, BarcodeError> {
        let session = params.session;

        let symbol = match session.input_method {
            InputMethod::Manual => {
                let code = params
                    .manual_code
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .ok_or(BarcodeError::CodeEmpty)?;
                BarcodeSymbol::manual(code)
            }
            InputMethod::ScanImage => {
                let image = params.image.ok_or(BarcodeError::ImageMissing)?;
                self.reader.decode(&image).ok_or_else(|| {
                    self.logger.warn(&format!(
                        "[session {}] Could not decode barcode from image {}",
                        session.id,
                        image.fingerprint()
                    ));
                    BarcodeError::NoSymbolDetected
                })?
            }
        };

        self.logger.info(&format!(
            "[session {}] Resolved code {} via {}",
            session.id, symbol.payload, session.input_method
        ));

        Ok(session.with_decoded(symbol))
    }
}
