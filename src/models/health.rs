use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Used as the response body of `GET /api/health`.
///
/// ## Fields
/// - `status`: "UP" when the document store answers a ping, "DOWN" otherwise
/// - `timestamp`: RFC 3339 timestamp of the check
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self::with_status("UP")
    }

    pub fn down() -> Self {
        Self::with_status("DOWN")
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
