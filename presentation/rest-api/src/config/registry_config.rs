use persistence::source::RegistrySourceConfig;
use std::env;

pub const DEFAULT_REGISTRY_PATH: &str = "data/products.json";

/// Location of the product registry file
///
/// Environment variables:
/// - REGISTRY_PATH: path of the registry JSON file (default: "data/products.json")
pub fn registry_source_from_env() -> RegistrySourceConfig {
    registry_source(env::var("REGISTRY_PATH").ok())
}

fn registry_source(path: Option<String>) -> RegistrySourceConfig {
    let path = path
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_REGISTRY_PATH.to_string());
    RegistrySourceConfig::new(path)
}
