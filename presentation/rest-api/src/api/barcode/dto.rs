use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::barcode::model::{BarcodeSymbol, Symbology};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SymbologyDto {
    #[oai(rename = "ean13")]
    Ean13,
    #[oai(rename = "qr_code")]
    QrCode,
}

impl From<Symbology> for SymbologyDto {
    fn from(symbology: Symbology) -> Self {
        match symbology {
            Symbology::Ean13 => SymbologyDto::Ean13,
            Symbology::QrCode => SymbologyDto::QrCode,
        }
    }
}

/// Request to decode the barcode in an image.
#[derive(Debug, Clone, Object)]
pub struct DecodeBarcodeRequest {
    /// Base64-encoded image data (PNG or JPEG), optionally as a data URL
    pub image_base64: String,
}

/// A decoded barcode.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BarcodeSymbolResponse {
    /// Text content of the symbol
    pub payload: String,
    /// Symbology, absent for codes entered by hand
    #[oai(skip_serializing_if_is_none)]
    pub symbology: Option<SymbologyDto>,
}

impl From<BarcodeSymbol> for BarcodeSymbolResponse {
    fn from(symbol: BarcodeSymbol) -> Self {
        Self {
            payload: symbol.payload,
            symbology: symbol.symbology.map(Into::into),
        }
    }
}
