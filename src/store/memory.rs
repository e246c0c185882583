//! In-memory document store for testing

use async_trait::async_trait;
use bson::Document;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::{StoreError, StoreResult};
use super::traits::DocumentStore;

/// In-memory document store keyed by collection name
#[derive(Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    failing: Arc<RwLock<HashMap<String, String>>>,
    queries: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of a collection
    pub async fn insert_many(&self, collection: &str, documents: Vec<Document>) {
        self.collections
            .write()
            .await
            .insert(collection.to_string(), documents);
    }

    /// Make every read of `collection` fail with a query error
    pub async fn fail_collection(&self, collection: &str, message: &str) {
        self.failing
            .write()
            .await
            .insert(collection.to_string(), message.to_string());
    }

    /// Number of `find_all` calls served so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failing.read().await.get(collection) {
            return Err(StoreError::query(message));
        }

        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_missing_collection_reads_empty() {
        let store = MemoryStore::new();
        let docs = store.find_all("startup").await.unwrap();
        assert!(docs.is_empty());
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn test_preserves_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert_many(
                "mentorship",
                vec![doc! { "name": "b" }, doc! { "name": "a" }],
            )
            .await;

        let docs = store.find_all("mentorship").await.unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_failing_collection() {
        let store = MemoryStore::new();
        store.fail_collection("sessions", "boom").await;

        let err = store.find_all("sessions").await.unwrap_err();
        assert!(matches!(err, StoreError::Query(ref m) if m == "boom"));
    }
}
