use chrono::{DateTime, Utc};

use crate::domain::barcode::model::BarcodeSymbol;
use crate::domain::shared::value_objects::SessionId;

/// How the caller supplies a barcode in the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMethod {
    Manual,
    ScanImage,
}

impl std::fmt::Display for InputMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMethod::Manual => write!(f, "manual"),
            InputMethod::ScanImage => write!(f, "scan_image"),
        }
    }
}

impl std::str::FromStr for InputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(InputMethod::Manual),
            "scan_image" => Ok(InputMethod::ScanImage),
            _ => Err(format!("Invalid input method: {}", s)),
        }
    }
}

/// Interaction state of one caller session.
///
/// Owned by the caller and handed to use cases explicitly; nothing in the
/// crate keeps it between calls.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: SessionId,
    pub input_method: InputMethod,
    pub last_decoded: Option<BarcodeSymbol>,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(id: SessionId, input_method: InputMethod) -> Self {
        Self {
            id,
            input_method,
            last_decoded: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_decoded(mut self, symbol: BarcodeSymbol) -> Self {
        self.last_decoded = Some(symbol);
        self
    }

    /// The code resolved for this session, if one was entered or scanned.
    pub fn current_code(&self) -> Option<&str> {
        self.last_decoded.as_ref().map(|s| s.payload.as_str())
    }
}
