//! Core trait definition for the document store

use async_trait::async_trait;
use bson::Document;

use super::error::StoreResult;

/// Read access to a schema-flexible document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document of a collection in natural store order
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Check that the backend answers
    async fn ping(&self) -> StoreResult<()>;

    /// Release the underlying connection
    async fn shutdown(&self);
}
