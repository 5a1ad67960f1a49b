use crate::error::ApiError;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;
use actix_web::{HttpResponse, web};

/// # Record Status Check
///
/// Stores a new status check for `client_name` with a fresh id and the
/// current time, then echoes the stored record.
///
/// ## Example Request
/// ```json
/// { "client_name": "tester" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 422, description = "Missing or mistyped client_name"),
        (status = 500, description = "Document store failure")
    ),
    tag = "Status Checks"
)]
#[tracing::instrument(skip_all, fields(client_name = %body.client_name))]
pub async fn create_status_check(
    state: web::Data<AppState>,
    body: web::Json<StatusCheckCreate>,
) -> Result<HttpResponse, ApiError> {
    let record = StatusCheck::new(body.into_inner().client_name);
    state.store.insert(&record).await?;
    tracing::info!(id = %record.id, "Recorded status check");
    Ok(HttpResponse::Ok().json(record))
}

/// # List Status Checks
///
/// Returns stored status checks in storage order. No sorting or paging; at
/// most `STATUS_LIST_LIMIT` records are returned.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = Vec<StatusCheck>),
        (status = 500, description = "Document store failure")
    ),
    tag = "Status Checks"
)]
#[tracing::instrument(skip_all)]
pub async fn list_status_checks(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = state.store.list(state.list_limit).await?;
    tracing::debug!(count = records.len(), "Listed status checks");
    Ok(HttpResponse::Ok().json(records))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/status")
            .route(web::post().to(create_status_check))
            .route(web::get().to(list_status_checks)),
    );
}
