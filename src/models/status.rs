use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A client-reported ping, persisted once and never modified.
///
/// `timestamp` is kept at millisecond precision so the record echoed on creation
/// matches what the document store hands back later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Request body of `POST /api/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_status_check_has_uuid_and_name() {
        let record = StatusCheck::new("tester");

        assert_eq!(record.client_name, "tester");
        assert!(Uuid::parse_str(&record.id).is_ok(), "id should be a UUID");
    }

    #[test]
    fn test_new_status_checks_get_distinct_ids() {
        let first = StatusCheck::new("a");
        let second = StatusCheck::new("a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_timestamp_is_millisecond_precision() {
        let record = StatusCheck::new("tester");
        assert_eq!(record.timestamp.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_status_check_json_shape() {
        let record = StatusCheck::new("tester");
        let value = serde_json::to_value(&record).unwrap();

        let object = value.as_object().expect("record should serialize to an object");
        assert_eq!(object.len(), 3);
        assert_eq!(value["id"], json!(record.id));
        assert_eq!(value["client_name"], "tester");

        let timestamp = value["timestamp"].as_str().expect("timestamp should be a string");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_create_payload_requires_client_name() {
        let result: Result<StatusCheckCreate, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_create_payload_rejects_non_string_name() {
        let result: Result<StatusCheckCreate, _> = serde_json::from_str(r#"{"client_name": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_payload_ignores_extra_fields() {
        let payload: StatusCheckCreate =
            serde_json::from_str(r#"{"client_name": "tester", "extra": true}"#).unwrap();
        assert_eq!(payload.client_name, "tester");
    }

    #[test]
    fn test_create_payload_accepts_empty_and_unicode_names() {
        let empty: StatusCheckCreate = serde_json::from_str(r#"{"client_name": ""}"#).unwrap();
        assert_eq!(empty.client_name, "");

        let unicode: StatusCheckCreate =
            serde_json::from_str(r#"{"client_name": "tëst 中国"}"#).unwrap();
        assert_eq!(unicode.client_name, "tëst 中国");
    }

    #[test]
    fn test_hello_message() {
        let value = serde_json::to_value(MessageResponse::hello()).unwrap();
        assert_eq!(value, json!({ "message": "Hello World" }));
    }
}
