use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa::path` annotations on the
/// handlers. Served by Swagger UI at `/swagger-ui/`.
///
/// # Endpoints
/// - Greeting: `GET /api`
/// - Health Check: `GET /api/health`
/// - Status Checks: `POST /api/status`, `GET /api/status`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            crate::models::MessageResponse,
            crate::models::HealthResponse,
            crate::models::StatusCheck,
            crate::models::StatusCheckCreate,
            crate::error::ErrorBody
        )
    ),
    tags(
        (name = "Root", description = "Greeting endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status Checks", description = "Record and list client status checks")
    ),
    info(
        description = "Records client status checks in a MongoDB collection",
        title = "Status Check API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
