//! MongoDB-backed document store

use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use tracing::{debug, info};

use super::error::{StoreError, StoreResult};
use super::traits::DocumentStore;

/// Document store over the official MongoDB driver
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Build a client for `url`, select `db_name` and verify the server answers.
    pub async fn connect(url: &str, db_name: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(StoreError::connection)?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options).map_err(StoreError::connection)?;
        let store = Self {
            database: client.database(db_name),
            client,
        };

        store.ping().await.map_err(StoreError::connection)?;
        info!("Connected to MongoDB database '{}'", db_name);

        Ok(store)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        debug!("Reading all documents from '{}'", collection);
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(doc! {})
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        debug!("Read {} documents from '{}'", documents.len(), collection);
        Ok(documents)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB connection closed");
    }
}
