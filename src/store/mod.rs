use crate::models::StatusCheck;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStatusStore;
pub use mongo::MongoStatusStore;

/// Name of the collection holding status check documents.
pub const STATUS_COLLECTION: &str = "status_checks";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("store has been shut down")]
    Closed,
}

/// Persistence for [`StatusCheck`] records.
///
/// Records are append-only. `list` returns them in whatever order the backend
/// yields, capped at `limit` entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError>;

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;

    /// Round-trips to the backend without touching any records.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases backend resources. Called once after the HTTP server stops.
    async fn shutdown(&self) {}
}
