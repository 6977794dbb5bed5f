use async_trait::async_trait;

use business::domain::verification::errors::VerificationError;
use business::domain::verification::model::ChainVerification;
use business::domain::verification::services::ChainVerifier;

pub const PLACEHOLDER_MESSAGE: &str = "Blockchain integration coming soon.";

/// Verifier used when no ledger endpoint is configured. Never reports a code
/// as verified.
#[derive(Default)]
pub struct ChainVerifierPlaceholder;

impl ChainVerifierPlaceholder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChainVerifier for ChainVerifierPlaceholder {
    async fn verify(&self, code: &str) -> Result<ChainVerification, VerificationError> {
        Ok(ChainVerification::not_implemented(code, PLACEHOLDER_MESSAGE))
    }
}
