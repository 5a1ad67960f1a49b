use super::{STATUS_COLLECTION, StatusStore, StoreError};
use crate::models::StatusCheck;
use async_trait::async_trait;
use futures::TryStreamExt;
use bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Shape of a status check as stored in MongoDB.
///
/// The timestamp is a native BSON datetime so the collection can be queried by
/// time from the shell. Mongo's own `_id` is ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(record: &StatusCheck) -> Self {
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: bson::DateTime::from_chrono(record.timestamp),
        }
    }
}

impl From<StatusCheckDocument> for StatusCheck {
    fn from(document: StatusCheckDocument) -> Self {
        Self {
            id: document.id,
            client_name: document.client_name,
            timestamp: document.timestamp.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoStatusStore {
    client: Client,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = Client::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            StoreError::from(e)
        })?;
        let collection = client.database(database).collection(STATUS_COLLECTION);
        tracing::info!(database = %database, "Connected to MongoDB");
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        self.collection
            .insert_one(StatusCheckDocument::from(record))
            .await?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let documents: Vec<StatusCheckDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(StatusCheck::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
