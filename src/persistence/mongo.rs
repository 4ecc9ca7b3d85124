//! MongoDB implementation of the persistence layer.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use super::{DocumentStore, Filter};
use crate::error::GatewayError;

/// MongoDB-backed document store.
///
/// Wraps a [`mongodb::Database`] handle; the driver owns connection
/// pooling, so clones share the same pool.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to `url`, selects `database_name` and pings the server.
    ///
    /// `connect_timeout` bounds both socket connect and server selection,
    /// so an unreachable server fails the ping instead of hanging startup.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the URL cannot be
    /// parsed or the ping fails.
    pub async fn connect(
        url: &str,
        database_name: &str,
        connect_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);

        let client = Client::with_options(options)
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        let database = client.database(database_name);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, GatewayError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            GatewayError::Internal(format!(
                "store returned non-ObjectId id {}",
                result.inserted_id
            ))
        })
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, GatewayError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter.to_document())
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<u64, GatewayError> {
        self.database
            .collection::<Document>(collection)
            .count_documents(filter.to_document())
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, GatewayError> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }
}
