//! Whole-collection reads

use bson::Document;
use tracing::debug;

use super::normalize::normalize_document;
use crate::store::{DocumentStore, StoreError, StoreResult};

/// Read every document of `collection` and normalize it.
///
/// Fails with [`StoreError::Unavailable`] without touching the store when no
/// connection was established.
pub async fn read_collection(
    store: Option<&dyn DocumentStore>,
    collection: &str,
) -> StoreResult<Vec<Document>> {
    let store = store.ok_or_else(|| StoreError::unavailable("no database connection"))?;

    let documents = store.find_all(collection).await?;
    debug!(
        "Normalizing {} documents from '{}'",
        documents.len(),
        collection
    );

    Ok(documents.into_iter().map(normalize_document).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, STARTUPS};
    use bson::doc;
    use bson::oid::ObjectId;

    #[tokio::test]
    async fn test_no_store_short_circuits() {
        let err = read_collection(None, STARTUPS).await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_reads_and_normalizes_in_store_order() {
        let store = MemoryStore::new();
        let first = ObjectId::new();
        let second = ObjectId::new();
        store
            .insert_many(
                STARTUPS,
                vec![
                    doc! { "_id": first, "name": "Rocket" },
                    doc! { "_id": second, "name": "Atlas" },
                ],
            )
            .await;

        let docs = read_collection(Some(&store), STARTUPS).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get_str("_id").unwrap(), first.to_hex());
        assert_eq!(docs[1].get_str("name").unwrap(), "Atlas");
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let store = MemoryStore::new();
        store.fail_collection(STARTUPS, "cursor killed").await;

        let err = read_collection(Some(&store), STARTUPS).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }
}
