use serde::{Deserialize, Serialize};

/// Barcode symbologies the readers know how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    Ean13,
    QrCode,
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "ean13"),
            Symbology::QrCode => write!(f, "qr_code"),
        }
    }
}

/// A decoded barcode: the text payload and, when known, its symbology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeSymbol {
    pub payload: String,
    pub symbology: Option<Symbology>,
}

impl BarcodeSymbol {
    pub fn new(payload: impl Into<String>, symbology: Option<Symbology>) -> Self {
        Self {
            payload: payload.into(),
            symbology,
        }
    }

    /// A code typed in by hand; it has no symbology.
    pub fn manual(payload: impl Into<String>) -> Self {
        Self::new(payload, None)
    }
}
