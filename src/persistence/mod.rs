//! Persistence layer: document store backends and the shared storage handle.
//!
//! Provides the [`DocumentStore`] trait for collection-oriented storage of
//! BSON documents. Two backends implement it: [`MongoStore`] for a real
//! MongoDB deployment and [`MemoryStore`] for tests and database-less
//! local runs. Handlers never see a backend directly; they go through
//! [`Storage`], which may be unavailable when no database was configured.

pub mod filter;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod storage;

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;

pub use filter::Filter;
pub use memory::MemoryStore;
pub use models::StoredEvent;
pub use mongo::MongoStore;
pub use storage::{ConnectionState, Storage, StorageStatus};

use crate::error::GatewayError;

/// Collection holding [`StoredEvent`] documents.
pub const EVENT_COLLECTION: &str = "event";

/// Collection holding [`crate::domain::Booking`] documents.
pub const BOOKING_COLLECTION: &str = "booking";

/// A named-collection document store.
///
/// Every call is a single storage round trip; there are no cross-call
/// transactions.
#[async_trait]
pub trait DocumentStore: std::fmt::Debug + Send + Sync {
    /// Name of the database this store writes to.
    fn database_name(&self) -> &str;

    /// Persists `document` and returns its id. An `_id` already present in
    /// the document is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on backend failure.
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, GatewayError>;

    /// Returns every document in `collection` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on backend failure.
    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, GatewayError>;

    /// Counts documents in `collection` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on backend failure.
    async fn count_documents(&self, collection: &str, filter: &Filter)
    -> Result<u64, GatewayError>;

    /// Lists the collections that currently exist.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on backend failure.
    async fn collection_names(&self) -> Result<Vec<String>, GatewayError>;
}
