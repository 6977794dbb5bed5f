use serde::{Deserialize, Serialize};

/// Rendered in place of any product field the source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Descriptive metadata for one product, keyed by its GTIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    pub manufacturer: String,
    pub gtin: String,
    pub mfg_date: String,
    pub expiry_date: String,
}

/// Raw fields of a product as found in a source; any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct ProductRecordProps {
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub gtin: String,
    pub mfg_date: Option<String>,
    pub expiry_date: Option<String>,
}

impl ProductRecord {
    /// Builds a record, replacing absent or blank optional fields with
    /// [`NOT_AVAILABLE`]. The gtin is stored trimmed.
    pub fn from_props(props: ProductRecordProps) -> Self {
        Self {
            product_name: or_not_available(props.product_name),
            manufacturer: or_not_available(props.manufacturer),
            gtin: props.gtin.trim().to_string(),
            mfg_date: or_not_available(props.mfg_date),
            expiry_date: or_not_available(props.expiry_date),
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
