use crate::models::MessageResponse;
use actix_web::{HttpResponse, Responder, web};

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "Root"
)]
#[tracing::instrument]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::hello())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(root));
}
