use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::ProductRecord;
use business::domain::session::model::InputMethod;

use crate::api::barcode::dto::BarcodeSymbolResponse;
use crate::api::verification::dto::ChainVerificationResponse;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum InputMethodDto {
    #[oai(rename = "manual")]
    Manual,
    #[oai(rename = "scan_image")]
    ScanImage,
}

impl From<InputMethodDto> for InputMethod {
    fn from(dto: InputMethodDto) -> Self {
        match dto {
            InputMethodDto::Manual => InputMethod::Manual,
            InputMethodDto::ScanImage => InputMethod::ScanImage,
        }
    }
}

impl From<InputMethod> for InputMethodDto {
    fn from(method: InputMethod) -> Self {
        match method {
            InputMethod::Manual => InputMethodDto::Manual,
            InputMethod::ScanImage => InputMethodDto::ScanImage,
        }
    }
}

/// Where a resolved code is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Enum)]
pub enum VerificationSourceDto {
    #[default]
    #[oai(rename = "registry")]
    Registry,
    #[oai(rename = "chain")]
    Chain,
}

/// Product data as stored in the registry. Absent fields read "N/A".
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductRecordResponse {
    pub product_name: String,
    pub manufacturer: String,
    pub gtin: String,
    pub mfg_date: String,
    pub expiry_date: String,
}

impl From<ProductRecord> for ProductRecordResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            product_name: record.product_name,
            manufacturer: record.manufacturer,
            gtin: record.gtin,
            mfg_date: record.mfg_date,
            expiry_date: record.expiry_date,
        }
    }
}

/// Request to look up a product by barcode.
#[derive(Debug, Clone, Object)]
pub struct LookupProductRequest {
    /// Barcode (GTIN); surrounding whitespace is ignored
    pub code: String,
    /// Caller session, echoed back; generated when absent
    #[oai(skip_serializing_if_is_none)]
    pub session_id: Option<String>,
}

/// One verification interaction: resolve a code, then look it up.
#[derive(Debug, Clone, Object)]
pub struct VerifyBarcodeRequest {
    /// Caller session, echoed back; generated when absent
    #[oai(skip_serializing_if_is_none)]
    pub session_id: Option<String>,
    /// How the code is supplied
    pub input_method: InputMethodDto,
    /// Code typed by hand (read when input_method is "manual")
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<String>,
    /// Base64-encoded barcode photo (read when input_method is "scan_image")
    #[oai(skip_serializing_if_is_none)]
    pub image_base64: Option<String>,
    /// Lookup target, "registry" by default
    #[oai(default)]
    pub source: VerificationSourceDto,
}

/// Result of a verification interaction.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VerifyBarcodeResponse {
    pub session_id: String,
    pub input_method: InputMethodDto,
    /// Code the lookup was made with
    pub barcode: BarcodeSymbolResponse,
    pub source: VerificationSourceDto,
    /// Registry match (source "registry")
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductRecordResponse>,
    /// Ledger answer (source "chain")
    #[oai(skip_serializing_if_is_none)]
    pub verification: Option<ChainVerificationResponse>,
}
