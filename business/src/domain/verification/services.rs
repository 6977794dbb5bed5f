use async_trait::async_trait;

use super::errors::VerificationError;
use super::model::ChainVerification;

/// Service port for asking a remote ledger about a barcode.
///
/// Implementations must bound every call with a timeout and report a
/// failure once, without retrying.
#[async_trait]
pub trait ChainVerifier: Send + Sync {
    async fn verify(&self, code: &str) -> Result<ChainVerification, VerificationError>;
}
