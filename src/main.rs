use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use status_check_api::config::{Settings, StoreBackend};
use status_check_api::openapi::ApiDoc;
use status_check_api::routes;
use status_check_api::state::AppState;
use status_check_api::store::{MemoryStatusStore, MongoStatusStore, StatusStore};
use status_check_api::telemetry::init_tracing;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Check Service Entry Point
///
/// Loads `.env`, connects the configured document store and serves:
/// - REST endpoints under `/api` (configured in routes)
/// - Swagger UI at `/swagger-ui/`
/// - OpenAPI spec at `/api-docs/openapi.json`
///
/// The store is closed after the server finishes its graceful shutdown.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info");

    let settings = Settings::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let store: Arc<dyn StatusStore> = match &settings.backend {
        StoreBackend::Mongo { uri, database } => Arc::new(
            MongoStatusStore::connect(uri, database)
                .await
                .map_err(|e| std::io::Error::other(format!("Database connection error: {}", e)))?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on exit");
            Arc::new(MemoryStatusStore::new())
        }
    };

    let state = Data::new(AppState::new(store.clone(), settings.list_limit));

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        list_limit = settings.list_limit,
        "Starting HTTP server"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .configure(routes::configure_app(state.clone()))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    store.shutdown().await;
    tracing::info!("Server stopped");
    Ok(())
}
