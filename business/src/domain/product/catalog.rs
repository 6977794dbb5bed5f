use std::collections::HashMap;

use crate::domain::errors::RegistryError;

use super::model::ProductRecord;

/// In-memory, read-only table of products indexed by trimmed GTIN.
///
/// GTINs are unique across entries: [`ProductCatalog::from_entries`] rejects
/// a table where two entries share one, so a lookup never has to pick
/// between candidates.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    records: Vec<ProductRecord>,
    by_gtin: HashMap<String, usize>,
}

impl ProductCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the catalog from `(entry key, record)` pairs. The entry key is
    /// only used to name the offenders when a GTIN is duplicated.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (String, ProductRecord)>,
    {
        let mut records = Vec::new();
        let mut keys: Vec<String> = Vec::new();
        let mut by_gtin: HashMap<String, usize> = HashMap::new();

        for (key, record) in entries {
            let gtin = record.gtin.trim().to_string();
            if let Some(&existing) = by_gtin.get(&gtin) {
                return Err(RegistryError::DuplicateGtin {
                    gtin,
                    first: keys[existing].clone(),
                    second: key,
                });
            }
            by_gtin.insert(gtin, records.len());
            records.push(record);
            keys.push(key);
        }

        Ok(Self { records, by_gtin })
    }

    /// Exact, case-sensitive match of the trimmed code against trimmed GTINs.
    pub fn lookup(&self, code: &str) -> Option<&ProductRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.by_gtin.get(code).map(|&index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
