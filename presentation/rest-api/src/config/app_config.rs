use super::{
    cors_config, ledger_config::LedgerConfig, registry_config, server_config::ServerConfig,
};
use persistence::source::RegistrySourceConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub registry: RegistrySourceConfig,
    pub ledger: LedgerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            registry: registry_config::registry_source_from_env(),
            ledger: LedgerConfig::from_env(),
        }
    }
}
