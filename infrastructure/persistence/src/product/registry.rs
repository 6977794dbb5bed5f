use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use business::domain::errors::RegistryError;
use business::domain::product::catalog::ProductCatalog;
use business::domain::product::model::ProductRecord;
use business::domain::product::registry::ProductRegistry;

use super::entity::ProductEntryEntity;
use crate::source::{RegistrySourceConfig, read_registry_source};

/// Product registry materialized from a JSON file of the form
/// `{ "<product name>": { "gtin": ..., "product_name": ..., ... } }`.
pub struct ProductRegistryJson {
    catalog: ProductCatalog,
    source: Option<PathBuf>,
}

impl ProductRegistryJson {
    /// Loads and fully materializes the registry file.
    ///
    /// Missing file: `ResourceNotFound`. Malformed JSON, an entry without a
    /// gtin, or two entries sharing a gtin: `ParseError` / `DuplicateGtin`.
    /// An empty or whitespace-only file yields an empty registry.
    pub fn load(config: &RegistrySourceConfig) -> Result<Self, RegistryError> {
        let raw = read_registry_source(config)?;
        let catalog = Self::parse(&raw)?;
        Ok(Self {
            catalog,
            source: Some(config.path().to_path_buf()),
        })
    }

    /// Registry with no data, used when the source could not be loaded.
    pub fn empty() -> Self {
        Self {
            catalog: ProductCatalog::empty(),
            source: None,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            catalog: Self::parse(raw)?,
            source: None,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn parse(raw: &str) -> Result<ProductCatalog, RegistryError> {
        if raw.trim().is_empty() {
            return Ok(ProductCatalog::empty());
        }

        let entries: BTreeMap<String, ProductEntryEntity> =
            serde_json::from_str(raw).map_err(|e| RegistryError::parse_error(e.to_string()))?;

        let records = entries
            .into_iter()
            .map(|(key, entity)| {
                let record = entity.into_domain(&key)?;
                Ok((key, record))
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        ProductCatalog::from_entries(records)
    }
}

impl ProductRegistry for ProductRegistryJson {
    fn lookup(&self, code: &str) -> Option<ProductRecord> {
        self.catalog.lookup(code).cloned()
    }

    fn len(&self) -> usize {
        self.catalog.len()
    }
}
