use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::registry::ProductRegistry;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of products in the loaded registry; 0 means no data
    pub registry_entries: u64,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    registry: Arc<dyn ProductRegistry>,
}

impl Api {
    pub fn new(registry: Arc<dyn ProductRegistry>) -> Self {
        Self { registry }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if the registry has data, "degraded" otherwise
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `registry_entries`: products available for lookup
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let entries = self.registry.len();
        let status = if entries == 0 { "degraded" } else { "healthy" };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            registry_entries: entries as u64,
        })
    }
}
