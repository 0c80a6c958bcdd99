use poem::{
    EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing,
    post,
};
use poem_openapi::OpenApiService;

use crate::api::web::routes as web;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.bind_address;
        let api_service = OpenApiService::new(
            (container.product_api, container.user_api),
            "Catalog Backend API",
            "0.1.0",
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/", get(web::home))
            .at("/submit", post(web::submit_form))
            .at("/health", get(web::health))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(container.web_context)
            .with(config.cors)
            .with(Tracing);
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        println!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
