use crate::store::StatusStore;
use std::sync::Arc;

/// Shared per-application state injected into handlers via `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatusStore>,
    pub list_limit: i64,
}

impl AppState {
    pub fn new(store: Arc<dyn StatusStore>, list_limit: i64) -> Self {
        Self { store, list_limit }
    }
}
