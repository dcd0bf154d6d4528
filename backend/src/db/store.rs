//! Document store abstraction
//!
//! The resolvers only ever need a handful of collection-scoped primitives, so
//! the store is modelled as a trait over raw BSON documents. Typed records are
//! decoded one layer up, in the repositories.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by the store and the repositories built on top of it
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Deserialize(#[from] mongodb::bson::de::Error),

    #[error("insert into '{collection}' did not return an ObjectId")]
    MissingInsertedId { collection: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Decode a raw document into a typed record
pub(crate) fn decode<T: DeserializeOwned>(document: Document) -> StoreResult<T> {
    Ok(mongodb::bson::from_document(document)?)
}

/// Encode a typed value into a raw document
pub(crate) fn encode<T: Serialize>(value: &T) -> StoreResult<Document> {
    Ok(mongodb::bson::to_document(value)?)
}

/// Collection-scoped operations against a schema-less document store.
///
/// Documents passed to [`insert`](DocumentStore::insert) must not carry an
/// `_id`; the store assigns one and returns it. Documents returned by every
/// read carry their `_id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name, used in log lines
    fn backend(&self) -> &'static str;

    /// Round-trip to the server to prove it is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Every document in the collection, in natural order
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// First document whose `field` equals `value`
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> StoreResult<Option<Document>>;

    /// Every document whose `_id` is in `ids`, in natural order. Unknown ids
    /// are ignored.
    async fn find_many_by_ids(
        &self,
        collection: &str,
        ids: &[ObjectId],
    ) -> StoreResult<Vec<Document>>;

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Overwrite each field in `fields` on the matching document and return
    /// the document as it is after the write.
    async fn find_and_update(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> StoreResult<Option<Document>>;

    /// Remove the matching document and return it as it was before removal
    async fn find_and_delete(&self, collection: &str, id: ObjectId)
    -> StoreResult<Option<Document>>;

    /// Release the underlying connection. The store must not be used afterwards.
    async fn close(&self);
}
