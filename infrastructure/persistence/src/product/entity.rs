use serde::{Deserialize, Deserializer};
use serde_json::Value;

use business::domain::errors::RegistryError;
use business::domain::product::model::{ProductRecord, ProductRecordProps};

/// One entry of the registry file, keyed by product name in the file.
#[derive(Debug, Deserialize)]
pub struct ProductEntryEntity {
    #[serde(default, deserialize_with = "string_or_number")]
    pub gtin: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub mfg_date: Option<String>,
    pub expiry_date: Option<String>,
}

impl ProductEntryEntity {
    pub fn into_domain(self, key: &str) -> Result<ProductRecord, RegistryError> {
        let gtin = self
            .gtin
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| RegistryError::parse_error(format!("entry '{}' has no gtin", key)))?;

        Ok(ProductRecord::from_props(ProductRecordProps {
            product_name: self.product_name,
            manufacturer: self.manufacturer,
            gtin,
            mfg_date: self.mfg_date,
            expiry_date: self.expiry_date,
        }))
    }
}

/// GTINs are sometimes written as bare JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "gtin must be a string or a number, got {}",
            other
        ))),
    }
}
