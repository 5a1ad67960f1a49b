/// # Health Status Response
///
/// Reports whether the service can reach its document store, with a timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
pub mod health;

/// Status check records and the payloads exchanged on `/api` and `/api/status`.
pub mod status;

pub use health::HealthResponse;
pub use status::{MessageResponse, StatusCheck, StatusCheckCreate};
