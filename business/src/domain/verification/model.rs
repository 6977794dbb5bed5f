use crate::domain::product::model::ProductRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum VerificationStatus {
    /// The ledger knows the code and returned its product data.
    Verified,
    /// No ledger integration is wired in; nothing was checked.
    NotImplemented,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::NotImplemented => write!(f, "not_implemented"),
        }
    }
}

/// Answer of a ledger lookup for one barcode.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainVerification {
    pub barcode: String,
    pub status: VerificationStatus,
    pub message: Option<String>,
    pub product: Option<ProductRecord>,
}

impl ChainVerification {
    pub fn verified(barcode: impl Into<String>, product: ProductRecord) -> Self {
        Self {
            barcode: barcode.into(),
            status: VerificationStatus::Verified,
            message: None,
            product: Some(product),
        }
    }

    pub fn not_implemented(barcode: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            status: VerificationStatus::NotImplemented,
            message: Some(message.into()),
            product: None,
        }
    }
}
