//! Shared storage handle with explicit availability.
//!
//! [`Storage`] is built once at startup. When no database URL is configured
//! or the initial ping fails it is left *unavailable*: construction never
//! fails, but every data call returns [`GatewayError::NotConfigured`].

use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::{self, DateTime, Document};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{DocumentStore, Filter, MongoStore};
use crate::config::GatewayConfig;
use crate::domain::DocumentId;
use crate::error::GatewayError;

/// Connection state reported by [`Storage::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// No backend was attached at startup.
    Unavailable,
    /// Backend attached and answering.
    Connected,
    /// Backend attached but the diagnostic call failed.
    Degraded(String),
}

/// Snapshot of storage health for the diagnostics endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    /// Whether a database URL was supplied at startup.
    pub url_configured: bool,
    /// Database name, when a backend is attached.
    pub database_name: Option<String>,
    /// Current connection state.
    pub state: ConnectionState,
    /// Collections present in the database.
    pub collections: Vec<String>,
}

/// Storage handle shared by every request.
#[derive(Debug, Clone)]
pub struct Storage {
    backend: Option<Arc<dyn DocumentStore>>,
    url_configured: bool,
}

impl Storage {
    /// Connects to MongoDB according to `config`.
    ///
    /// Never fails: a missing URL or a failed ping yields an unavailable
    /// handle and a warning in the log.
    pub async fn connect(config: &GatewayConfig) -> Self {
        let Some(url) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set; storage unavailable");
            return Self {
                backend: None,
                url_configured: false,
            };
        };

        let timeout = Duration::from_secs(config.database_connect_timeout_secs);
        match MongoStore::connect(url, &config.database_name, timeout).await {
            Ok(store) => {
                tracing::info!(database = %config.database_name, "connected to document store");
                Self {
                    backend: Some(Arc::new(store)),
                    url_configured: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "document store unreachable; storage unavailable");
                Self {
                    backend: None,
                    url_configured: true,
                }
            }
        }
    }

    /// Wraps an already-connected backend.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            backend: Some(backend),
            url_configured: true,
        }
    }

    /// A handle with no backend.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            backend: None,
            url_configured: false,
        }
    }

    /// Returns `true` if a backend is attached.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the backend or [`GatewayError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] if no backend is attached.
    pub fn backend(&self) -> Result<&dyn DocumentStore, GatewayError> {
        self.backend.as_deref().ok_or(GatewayError::NotConfigured)
    }

    /// Stamps `created_at`/`updated_at` onto `record` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] when unavailable,
    /// [`GatewayError::Internal`] if `record` is not a BSON document, or the
    /// backend's error on write failure.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> Result<DocumentId, GatewayError>
    where
        T: Serialize + Sync,
    {
        let backend = self.backend()?;
        let mut document = bson::to_document(record)
            .map_err(|e| GatewayError::Internal(format!("cannot encode record: {e}")))?;
        stamp(&mut document, DateTime::now());

        let id = backend.insert_document(collection, document).await?;
        Ok(DocumentId::from_object_id(id))
    }

    /// Returns every record in `collection` matching `filter`.
    ///
    /// Stored fields `T` does not declare, such as `_id` and the
    /// timestamps, are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] when unavailable,
    /// [`GatewayError::Internal`] if a stored document does not fit `T`, or
    /// the backend's error on read failure.
    pub async fn query<T>(&self, collection: &str, filter: &Filter) -> Result<Vec<T>, GatewayError>
    where
        T: DeserializeOwned,
    {
        let backend = self.backend()?;
        backend
            .find_documents(collection, filter)
            .await?
            .into_iter()
            .map(|document| {
                bson::from_document(document).map_err(|e| {
                    GatewayError::Internal(format!("stored document in {collection} is malformed: {e}"))
                })
            })
            .collect()
    }

    /// Counts records in `collection` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] when unavailable, or the
    /// backend's error on read failure.
    pub async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, GatewayError> {
        self.backend()?.count_documents(collection, filter).await
    }

    /// Probes the backend for the diagnostics endpoint.
    pub async fn status(&self) -> StorageStatus {
        let Some(backend) = self.backend.as_deref() else {
            return StorageStatus {
                url_configured: self.url_configured,
                database_name: None,
                state: ConnectionState::Unavailable,
                collections: Vec::new(),
            };
        };

        let (state, collections) = match backend.collection_names().await {
            Ok(names) => (ConnectionState::Connected, names),
            Err(e) => (ConnectionState::Degraded(e.to_string()), Vec::new()),
        };
        StorageStatus {
            url_configured: self.url_configured,
            database_name: Some(backend.database_name().to_string()),
            state,
            collections,
        }
    }
}

fn stamp(document: &mut Document, now: DateTime) {
    document.insert("created_at", now);
    document.insert("updated_at", now);
}
