use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_routes(container, &addr).with(config.cors).with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// API routes plus the OpenAPI document and Swagger UI, without middleware.
pub fn build_routes(container: DependencyContainer, addr: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.barcode_api,
            container.product_api,
            container.authenticity_api,
            container.verification_api,
        ),
        "MedChain Authenticator API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
}
