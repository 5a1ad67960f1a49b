use crate::error;
use crate::state::AppState;
use actix_web::web;

/// # Greeting Endpoint
///
/// `GET /api` answers `{"message": "Hello World"}`.
pub mod root;

/// # Health Check Endpoint
///
/// Pings the document store and reports "UP" or "DOWN" with a timestamp.
///
/// ## Responses
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store ping failed
pub mod health;

/// # Status Check Endpoints
///
/// ## Routes
/// - `POST /status`: records a status check for `client_name`
/// - `GET /status`: lists recorded status checks, capped at the configured limit
///
/// ## Responses
/// - **200 OK**: the created record, or the array of records
/// - **400 / 415 / 422**: body rejected before the handler runs
/// - **500 Internal Server Error**: document store failure
pub mod status;


/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path.
///
/// ```text
/// GET  /api         - Greeting
/// GET  /api/health  - Store health
/// POST /api/status  - Record a status check
/// GET  /api/status  - List status checks
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(root::configure_routes)
            .configure(health::configure_routes)
            .configure(status::configure_routes),
    );
}

/// Registers the shared state, the JSON extractor config and all routes.
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state).app_data(error::json_config());
        configure(cfg);
    }
}
