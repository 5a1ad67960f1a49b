use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Returns "UP" when the document store answers a ping.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::up()),
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            HttpResponse::ServiceUnavailable().json(HealthResponse::down())
        }
    }
}

/// Registers `GET /health`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
