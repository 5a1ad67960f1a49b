//! Black-box checks against a running instance.
//!
//! Drives the `status-smoke` binary: greet, create one record, then make sure
//! it shows up in the listing.

use crate::models::StatusCheck;
use chrono::DateTime;
use serde_json::{Value, json};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_CLIENT_NAME: &str = "echo_tap_tester";
pub const DEFAULT_ENV_FILE: &str = "frontend/.env";
pub const BACKEND_URL_KEY: &str = "EXPO_PUBLIC_BACKEND_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("backend URL not configured: {0}")]
    Config(String),

    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("expected status 200, got {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Shape(String),
}

/// Resolves the base URL from `BACKEND_URL`, falling back to
/// `EXPO_PUBLIC_BACKEND_URL` in the env file named by `SMOKE_ENV_FILE`
/// (default `frontend/.env`).
pub fn resolve_base_url() -> Result<String, SmokeError> {
    if let Ok(url) = std::env::var("BACKEND_URL") {
        return Ok(url.trim_end_matches('/').to_string());
    }
    let path = std::env::var("SMOKE_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    base_url_from_env_file(Path::new(&path))
}

pub fn base_url_from_env_file(path: &Path) -> Result<String, SmokeError> {
    // Parses the file without exporting its variables into this process.
    #[allow(deprecated)]
    let entries = dotenv::from_path_iter(path)
        .map_err(|e| SmokeError::Config(format!("{}: {}", path.display(), e)))?;

    for entry in entries {
        let (key, value) = entry.map_err(|e| SmokeError::Config(e.to_string()))?;
        if key == BACKEND_URL_KEY {
            return Ok(value.trim().trim_end_matches('/').to_string());
        }
    }

    Err(SmokeError::Config(format!(
        "{} not found in {}",
        BACKEND_URL_KEY,
        path.display()
    )))
}

pub struct SmokeClient {
    base_url: String,
    http: reqwest::Client,
}

impl SmokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SmokeError> {
        let base_url: String = base_url.into();
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, SmokeError> {
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SmokeError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// `GET /api` must answer `{"message": "Hello World"}`.
    pub async fn check_root(&self) -> Result<(), SmokeError> {
        let body = Self::read_json(self.http.get(self.url("/api")).send().await?).await?;
        match body.get("message").and_then(Value::as_str) {
            Some("Hello World") => Ok(()),
            _ => Err(SmokeError::Shape(format!(
                "expected message 'Hello World', got {}",
                body
            ))),
        }
    }

    /// `POST /api/status` must echo a complete, well-formed record.
    pub async fn check_create(&self, client_name: &str) -> Result<StatusCheck, SmokeError> {
        let response = self
            .http
            .post(self.url("/api/status"))
            .json(&json!({ "client_name": client_name }))
            .send()
            .await?;
        let body = Self::read_json(response).await?;

        let missing: Vec<&str> = ["id", "client_name", "timestamp"]
            .into_iter()
            .filter(|field| body.get(field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SmokeError::Shape(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let id = body["id"].as_str().unwrap_or_default();
        if Uuid::parse_str(id).is_err() {
            return Err(SmokeError::Shape(format!("invalid UUID: {}", body["id"])));
        }

        if body["client_name"].as_str() != Some(client_name) {
            return Err(SmokeError::Shape(format!(
                "client_name mismatch: expected {}, got {}",
                client_name, body["client_name"]
            )));
        }

        let timestamp = body["timestamp"].as_str().unwrap_or_default();
        if DateTime::parse_from_rfc3339(timestamp).is_err() {
            return Err(SmokeError::Shape(format!(
                "invalid timestamp: {}",
                body["timestamp"]
            )));
        }

        serde_json::from_value(body).map_err(|e| SmokeError::Shape(e.to_string()))
    }

    /// `GET /api/status` must return an array; when `expected_client_name` is
    /// given, at least one item must carry it. Returns the item count.
    pub async fn check_list(&self, expected_client_name: Option<&str>) -> Result<usize, SmokeError> {
        let body = Self::read_json(self.http.get(self.url("/api/status")).send().await?).await?;
        let items = body
            .as_array()
            .ok_or_else(|| SmokeError::Shape(format!("expected array response, got {}", body)))?;

        if let Some(name) = expected_client_name {
            let found = items
                .iter()
                .any(|item| item.get("client_name").and_then(Value::as_str) == Some(name));
            if !found {
                return Err(SmokeError::Shape(format!(
                    "no entries found with client_name '{}'",
                    name
                )));
            }
        }

        Ok(items.len())
    }

    /// Runs the three checks in order. The listing only looks for the posted
    /// name when the create check passed.
    pub async fn run(&self, client_name: &str) -> SmokeReport {
        let mut report = SmokeReport::default();

        let root = self.check_root().await;
        report.record("GET /api", root);

        let created = self.check_create(client_name).await;
        let expected = created.is_ok().then_some(client_name);
        report.record("POST /api/status", created.map(|_| ()));

        let listed = self.check_list(expected).await;
        report.record("GET /api/status", listed.map(|_| ()));

        report
    }
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub results: Vec<(&'static str, Result<(), String>)>,
}

impl SmokeReport {
    fn record(&mut self, name: &'static str, result: Result<(), SmokeError>) {
        match &result {
            Ok(()) => tracing::info!(check = name, "Passed"),
            Err(e) => tracing::warn!(check = name, error = %e, "Failed"),
        }
        self.results.push((name, result.map_err(|e| e.to_string())));
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.results.len()
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, result) in &self.results {
            match result {
                Ok(()) => writeln!(f, "{}: PASSED", name)?,
                Err(e) => writeln!(f, "{}: FAILED ({})", name, e)?,
            }
        }
        write!(
            f,
            "Overall: {}/{} checks passed",
            self.passed(),
            self.results.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure_app;
    use crate::state::AppState;
    use crate::store::MemoryStatusStore;
    use actix_web::dev::ServerHandle;
    use actix_web::{App, HttpServer, web};
    use std::sync::Arc;

    fn spawn_app() -> (String, ServerHandle) {
        let state = web::Data::new(AppState::new(Arc::new(MemoryStatusStore::new()), 1000));
        let server = HttpServer::new(move || App::new().configure(configure_app(state.clone())))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("Failed to bind test server");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (format!("http://{}", addr), handle)
    }

    #[actix_web::test]
    async fn test_smoke_run_passes_against_live_server() {
        let (base_url, handle) = spawn_app();
        let client = SmokeClient::new(format!("{}/", base_url)).unwrap();

        let report = client.run(DEFAULT_CLIENT_NAME).await;

        assert!(report.all_passed(), "{}", report);
        assert_eq!(report.passed(), 3);
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_list_check_counts_posted_records() {
        let (base_url, handle) = spawn_app();
        let client = SmokeClient::new(base_url).unwrap();

        assert_eq!(client.check_list(None).await.unwrap(), 0);
        assert!(matches!(
            client.check_list(Some("nobody")).await,
            Err(SmokeError::Shape(_))
        ));

        let created = client.check_create("tester").await.unwrap();
        assert_eq!(created.client_name, "tester");
        assert_eq!(client.check_list(Some("tester")).await.unwrap(), 1);
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_unreachable_backend_fails_every_check() {
        let client = SmokeClient::new("http://127.0.0.1:9").unwrap();

        let report = client.run(DEFAULT_CLIENT_NAME).await;

        assert_eq!(report.passed(), 0);
        assert!(!report.all_passed());
        assert!(report.to_string().ends_with("Overall: 0/3 checks passed"));
    }

    #[test]
    fn test_base_url_from_env_file() {
        let path = std::env::temp_dir().join(format!("smoke-{}.env", Uuid::new_v4()));
        std::fs::write(
            &path,
            "EXPO_PACKAGER_HOSTNAME=localhost\nEXPO_PUBLIC_BACKEND_URL=https://example.test/\n",
        )
        .unwrap();

        let url = base_url_from_env_file(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(url.unwrap(), "https://example.test");
    }

    #[test]
    fn test_base_url_missing_key_is_config_error() {
        let path = std::env::temp_dir().join(format!("smoke-{}.env", Uuid::new_v4()));
        std::fs::write(&path, "OTHER=1\n").unwrap();

        let url = base_url_from_env_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(url, Err(SmokeError::Config(_))));
    }

    #[test]
    fn test_base_url_missing_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.env", Uuid::new_v4()));
        assert!(matches!(
            base_url_from_env_file(&path),
            Err(SmokeError::Config(_))
        ));
    }
}
