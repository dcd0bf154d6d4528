//! Media database repository
//!
//! Stored field names follow the public API (`uploadDate`, `contentURL`, ...)
//! so documents written by other clients of the same database decode cleanly.

use std::sync::Arc;

use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::store::{DocumentStore, StoreResult, decode, encode};

/// Name of the collection holding media documents
pub const MEDIA_COLLECTION: &str = "media";

/// Media document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub date: String,
    pub title: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(rename = "contentURL")]
    pub content_url: String,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "webURL")]
    pub web_url: String,
    pub description: Option<String>,
}

/// Every writable field of a media document.
///
/// Used for both inserts and full-replace updates; a `None` description is
/// written as null rather than left untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaFields {
    pub date: String,
    pub title: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(rename = "contentURL")]
    pub content_url: String,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "webURL")]
    pub web_url: String,
    pub description: Option<String>,
}

/// Media database repository
pub struct MediaRepository {
    store: Arc<dyn DocumentStore>,
}

impl MediaRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Get every media document in natural order
    pub async fn list(&self) -> StoreResult<Vec<MediaRecord>> {
        self.store
            .find_all(MEDIA_COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Get a media document by ID
    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<MediaRecord>> {
        self.store
            .find_by_id(MEDIA_COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Get a media document by its web path
    pub async fn get_by_web_url(&self, web_url: &str) -> StoreResult<Option<MediaRecord>> {
        self.store
            .find_by_field(MEDIA_COLLECTION, "webURL", Bson::String(web_url.to_string()))
            .await?
            .map(decode)
            .transpose()
    }

    /// Resolve a list of IDs to media documents.
    ///
    /// The result is in the store's natural order, not the order of `ids`.
    /// Unknown IDs are skipped and a repeated ID yields a single entry.
    pub async fn get_many(&self, ids: &[ObjectId]) -> StoreResult<Vec<MediaRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.store
            .find_many_by_ids(MEDIA_COLLECTION, ids)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Insert a new media document and read it back
    pub async fn create(&self, fields: MediaFields) -> StoreResult<Option<MediaRecord>> {
        let id = self.store.insert(MEDIA_COLLECTION, encode(&fields)?).await?;
        tracing::debug!(collection = MEDIA_COLLECTION, id = %id, "Media created");
        self.get(id).await
    }

    /// Replace every field of an existing media document
    pub async fn update(
        &self,
        id: ObjectId,
        fields: MediaFields,
    ) -> StoreResult<Option<MediaRecord>> {
        let record: Option<MediaRecord> = self
            .store
            .find_and_update(MEDIA_COLLECTION, id, encode(&fields)?)
            .await?
            .map(decode)
            .transpose()?;

        if record.is_none() {
            tracing::debug!(collection = MEDIA_COLLECTION, id = %id, "Media update matched nothing");
        }
        Ok(record)
    }

    /// Delete a media document, returning it as it was before deletion.
    ///
    /// Collections that embedded this media keep their copy.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<Option<MediaRecord>> {
        self.store
            .find_and_delete(MEDIA_COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }
}
