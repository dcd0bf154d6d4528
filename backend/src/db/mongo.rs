//! MongoDB-backed document store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use parking_lot::Mutex;

use super::store::{DocumentStore, StoreError, StoreResult};

/// Store backed by a single shared `mongodb::Client`
pub struct MongoStore {
    client: Mutex<Option<Client>>,
    db: mongodb::Database,
}

impl MongoStore {
    /// Open a client for `uri` and select `database`.
    ///
    /// The driver connects lazily, so callers should [`ping`](DocumentStore::ping)
    /// before relying on the connection.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        Ok(Self {
            client: Mutex::new(Some(client)),
            db,
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> StoreResult<Option<Document>> {
        let mut filter = Document::new();
        filter.insert(field, value);
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn find_many_by_ids(
        &self,
        collection: &str,
        ids: &[ObjectId],
    ) -> StoreResult<Vec<Document>> {
        let ids: Vec<Bson> = ids.iter().copied().map(Bson::ObjectId).collect();
        let cursor = self
            .collection(collection)
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingInsertedId {
                collection: collection.to_string(),
            })
    }

    async fn find_and_update(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn find_and_delete(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one_and_delete(doc! { "_id": id })
            .await?)
    }

    async fn close(&self) {
        let client = self.client.lock().take();
        if let Some(client) = client {
            client.shutdown().await;
        }
    }
}
