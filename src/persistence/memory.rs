//! In-process document store.
//!
//! [`MemoryStore`] keeps every collection in a `HashMap` behind a
//! [`tokio::sync::RwLock`]. Each call takes the lock once, so a single
//! insert or query is atomic, the same guarantee a MongoDB round trip gives.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{DocumentStore, Filter};
use crate::error::GatewayError;

/// Volatile [`DocumentStore`] used by tests and database-less runs.
#[derive(Debug)]
pub struct MemoryStore {
    database_name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Creates an empty store reporting the given database name.
    #[must_use]
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn insert_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, GatewayError> {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut map = self.collections.write().await;
        let docs = map.entry(collection.to_string()).or_default();
        if docs
            .iter()
            .any(|d| d.get_object_id("_id").is_ok_and(|existing| existing == id))
        {
            return Err(GatewayError::PersistenceError(format!(
                "duplicate _id {id} in {collection}"
            )));
        }
        docs.push(document);
        Ok(id)
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, GatewayError> {
        let map = self.collections.read().await;
        Ok(map
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<u64, GatewayError> {
        let map = self.collections.read().await;
        let count = map
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|d| filter.matches(d)).count());
        Ok(count as u64)
    }

    async fn collection_names(&self) -> Result<Vec<String>, GatewayError> {
        let map = self.collections.read().await;
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn insert_assigns_id_and_find_returns_it() {
        let store = MemoryStore::default();
        let result = store
            .insert_document("event", doc! { "title": "Quiz Night" })
            .await;
        let Ok(id) = result else {
            panic!("insert failed");
        };

        let found = store.find_documents("event", &Filter::Id(id)).await;
        let Ok(found) = found else {
            panic!("find failed");
        };
        assert_eq!(found.len(), 1);
        assert_eq!(
            found.first().and_then(|d| d.get_str("title").ok()),
            Some("Quiz Night")
        );
    }

    #[tokio::test]
    async fn explicit_id_is_kept_and_duplicates_rejected() {
        let store = MemoryStore::default();
        let id = ObjectId::new();

        let first = store.insert_document("event", doc! { "_id": id }).await;
        assert!(first.is_ok_and(|assigned| assigned == id));

        let second = store.insert_document("event", doc! { "_id": id }).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::default();
        let found = store.find_documents("missing", &Filter::All).await;
        assert!(found.is_ok_and(|docs| docs.is_empty()));
        let count = store.count_documents("missing", &Filter::All).await;
        assert!(count.is_ok_and(|n| n == 0));
    }

    #[tokio::test]
    async fn count_respects_filter() {
        let store = MemoryStore::default();
        let _ = store
            .insert_document("event", doc! { "category": "concert" })
            .await;
        let _ = store
            .insert_document("event", doc! { "category": "cinema" })
            .await;

        let concerts = Filter::Equals {
            field: "category".to_string(),
            value: "concert".to_string(),
        };
        assert!(store.count_documents("event", &concerts).await.is_ok_and(|n| n == 1));
        assert!(store.count_documents("event", &Filter::All).await.is_ok_and(|n| n == 2));
    }

    #[tokio::test]
    async fn collection_names_are_listed_sorted() {
        let store = MemoryStore::new("event_booking");
        assert_eq!(store.database_name(), "event_booking");
        let _ = store.insert_document("event", Document::new()).await;
        let _ = store.insert_document("booking", Document::new()).await;

        let names = store.collection_names().await;
        assert!(names.is_ok_and(|n| n == ["booking", "event"]));
    }
}
