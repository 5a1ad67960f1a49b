use super::{StatusStore, StoreError};
use crate::models::StatusCheck;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Keeps records in process memory, in insertion order.
///
/// Used by the test suite and for running the service without a database
/// (`STORE_BACKEND=memory`). Everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    records: RwLock<Vec<StatusCheck>>,
    closed: AtomicBool,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        self.ensure_open()?;
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        self.ensure_open()?;
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.records.read().await.iter().take(take).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
