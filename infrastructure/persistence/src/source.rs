use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::errors::RegistryError;

/// Location of the static registry resource.
#[derive(Debug, Clone)]
pub struct RegistrySourceConfig {
    pub path: PathBuf,
}

impl RegistrySourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads the whole registry resource as text.
pub fn read_registry_source(config: &RegistrySourceConfig) -> Result<String, RegistryError> {
    std::fs::read_to_string(config.path()).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RegistryError::resource_not_found(),
        _ => RegistryError::unreadable(format!("{}: {}", config.path().display(), e)),
    })
}
