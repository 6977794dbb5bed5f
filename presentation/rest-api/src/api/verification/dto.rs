use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::verification::model::{ChainVerification, VerificationStatus};

use crate::api::product::dto::ProductRecordResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum VerificationStatusDto {
    #[oai(rename = "verified")]
    Verified,
    #[oai(rename = "not_implemented")]
    NotImplemented,
}

impl From<VerificationStatus> for VerificationStatusDto {
    fn from(status: VerificationStatus) -> Self {
        match status {
            VerificationStatus::Verified => VerificationStatusDto::Verified,
            VerificationStatus::NotImplemented => VerificationStatusDto::NotImplemented,
        }
    }
}

/// Request to verify a code against the ledger.
#[derive(Debug, Clone, Object)]
pub struct VerifyRemoteRequest {
    /// Barcode to verify
    pub code: String,
    /// Caller session, echoed back; generated when absent
    #[oai(skip_serializing_if_is_none)]
    pub session_id: Option<String>,
}

/// Ledger answer for one code.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChainVerificationResponse {
    pub barcode: String,
    pub status: VerificationStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductRecordResponse>,
}

impl From<ChainVerification> for ChainVerificationResponse {
    fn from(verification: ChainVerification) -> Self {
        Self {
            barcode: verification.barcode,
            status: verification.status.into(),
            message: verification.message,
            product: verification.product.map(Into::into),
        }
    }
}
