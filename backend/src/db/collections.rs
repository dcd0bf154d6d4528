//! Collections database repository
//!
//! A collection stores full copies of its media documents, taken when the
//! collection is created or updated. Later edits to a media document are not
//! reflected in collections that already embedded it.

use std::sync::Arc;

use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::media::{MediaRecord, MediaRepository};
use super::store::{DocumentStore, StoreResult, decode, encode};

/// Name of the collection holding collection documents
pub const COLLECTIONS_COLLECTION: &str = "collections";

/// Collection document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
    #[serde(rename = "webURL")]
    pub web_url: String,
}

/// Data for creating or fully replacing a collection
#[derive(Debug, Clone)]
pub struct CollectionInput {
    pub title: String,
    pub description: Option<String>,
    /// Media to snapshot into the collection, in display order
    pub media_ids: Vec<ObjectId>,
    pub web_url: String,
}

#[derive(Serialize)]
struct CollectionFields<'a> {
    title: &'a str,
    description: Option<&'a str>,
    media: &'a [MediaRecord],
    #[serde(rename = "webURL")]
    web_url: &'a str,
}

/// Collections database repository
pub struct CollectionRepository {
    store: Arc<dyn DocumentStore>,
}

impl CollectionRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Get every collection in natural order
    pub async fn list(&self) -> StoreResult<Vec<CollectionRecord>> {
        self.store
            .find_all(COLLECTIONS_COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Get a collection by ID
    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<CollectionRecord>> {
        self.store
            .find_by_id(COLLECTIONS_COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Get a collection by its web path
    pub async fn get_by_web_url(&self, web_url: &str) -> StoreResult<Option<CollectionRecord>> {
        self.store
            .find_by_field(
                COLLECTIONS_COLLECTION,
                "webURL",
                Bson::String(web_url.to_string()),
            )
            .await?
            .map(decode)
            .transpose()
    }

    /// Snapshot the referenced media, insert the collection and read it back
    pub async fn create(&self, input: CollectionInput) -> StoreResult<Option<CollectionRecord>> {
        let media = self.snapshot_media(&input.media_ids).await?;
        let document = encode(&CollectionFields {
            title: &input.title,
            description: input.description.as_deref(),
            media: &media,
            web_url: &input.web_url,
        })?;

        let id = self.store.insert(COLLECTIONS_COLLECTION, document).await?;
        tracing::debug!(
            collection = COLLECTIONS_COLLECTION,
            id = %id,
            media_count = media.len(),
            "Collection created"
        );
        self.get(id).await
    }

    /// Re-snapshot the referenced media and replace every field of the collection
    pub async fn update(
        &self,
        id: ObjectId,
        input: CollectionInput,
    ) -> StoreResult<Option<CollectionRecord>> {
        let media = self.snapshot_media(&input.media_ids).await?;
        let fields = encode(&CollectionFields {
            title: &input.title,
            description: input.description.as_deref(),
            media: &media,
            web_url: &input.web_url,
        })?;

        self.store
            .find_and_update(COLLECTIONS_COLLECTION, id, fields)
            .await?
            .map(decode)
            .transpose()
    }

    /// Delete a collection, returning it as it was before deletion
    pub async fn delete(&self, id: ObjectId) -> StoreResult<Option<CollectionRecord>> {
        self.store
            .find_and_delete(COLLECTIONS_COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    async fn snapshot_media(&self, ids: &[ObjectId]) -> StoreResult<Vec<MediaRecord>> {
        let media = MediaRepository::new(self.store.clone()).get_many(ids).await?;
        if media.len() < ids.len() {
            tracing::debug!(
                requested = ids.len(),
                resolved = media.len(),
                "Some media IDs did not resolve"
            );
        }
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::db::media::tests::sunset;

    fn repos() -> (MediaRepository, CollectionRepository) {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        (
            MediaRepository::new(store.clone()),
            CollectionRepository::new(store),
        )
    }

    fn trip(media_ids: Vec<ObjectId>) -> CollectionInput {
        CollectionInput {
            title: "Trip".to_string(),
            description: None,
            media_ids,
            web_url: "/col/1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_embeds_media_copies() {
        let (media, collections) = repos();
        let sunset = media.create(sunset()).await.unwrap().unwrap();

        let created = collections.create(trip(vec![sunset.id])).await.unwrap().unwrap();
        assert_eq!(created.media, vec![sunset.clone()]);

        let by_url = collections.get_by_web_url("/col/1").await.unwrap().unwrap();
        assert_eq!(by_url.id, created.id);
    }

    #[tokio::test]
    async fn test_embedded_media_is_a_snapshot() {
        let (media, collections) = repos();
        let m1 = media.create(sunset()).await.unwrap().unwrap();
        let mut second = sunset();
        second.title = "Beach".to_string();
        let m2 = media.create(second).await.unwrap().unwrap();

        let created = collections
            .create(trip(vec![m1.id, m2.id]))
            .await
            .unwrap()
            .unwrap();

        let mut renamed = sunset();
        renamed.title = "Renamed".to_string();
        media.update(m1.id, renamed).await.unwrap().unwrap();
        media.delete(m2.id).await.unwrap().unwrap();

        let stored = collections.get(created.id).await.unwrap().unwrap();
        let titles: Vec<_> = stored.media.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Sunset", "Beach"]);
    }

    #[tokio::test]
    async fn test_unknown_media_ids_are_dropped() {
        let (media, collections) = repos();
        let m1 = media.create(sunset()).await.unwrap().unwrap();

        let created = collections
            .create(trip(vec![ObjectId::new(), m1.id]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.media.len(), 1);
        assert_eq!(created.media[0].id, m1.id);
    }

    #[tokio::test]
    async fn test_update_resnapshots_media() {
        let (media, collections) = repos();
        let m1 = media.create(sunset()).await.unwrap().unwrap();
        let created = collections.create(trip(vec![m1.id])).await.unwrap().unwrap();

        let mut renamed = sunset();
        renamed.title = "Renamed".to_string();
        media.update(m1.id, renamed).await.unwrap();

        let mut input = trip(vec![m1.id]);
        input.description = Some("second pass".to_string());
        let updated = collections.update(created.id, input).await.unwrap().unwrap();

        assert_eq!(updated.description.as_deref(), Some("second pass"));
        assert_eq!(updated.media[0].title, "Renamed");
    }

    #[tokio::test]
    async fn test_missing_collection_update_and_delete() {
        let (_, collections) = repos();
        let id = ObjectId::new();
        assert!(collections.update(id, trip(vec![])).await.unwrap().is_none());
        assert!(collections.delete(id).await.unwrap().is_none());
        assert!(collections.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_pre_image() {
        let (_, collections) = repos();
        let created = collections.create(trip(vec![])).await.unwrap().unwrap();

        let deleted = collections.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);
        assert!(collections.get(created.id).await.unwrap().is_none());
    }
}
