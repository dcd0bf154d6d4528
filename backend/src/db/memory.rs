//! In-process document store
//!
//! Keeps every collection as an insertion-ordered `Vec<Document>`, which gives
//! the same "natural order" a fresh MongoDB collection reports. Used by the
//! test suite and by `--memory` for running the server without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use parking_lot::RwLock;

use super::store::{DocumentStore, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(oid)) if oid == id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, &id)).cloned()))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> StoreResult<Option<Document>> {
        Ok(self.collections.read().get(collection).and_then(|docs| {
            docs.iter()
                .find(|d| d.get(field) == Some(&value))
                .cloned()
        }))
    }

    async fn find_many_by_ids(
        &self,
        collection: &str,
        ids: &[ObjectId],
    ) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| ids.iter().any(|id| has_id(d, id)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        let mut stored = Document::new();
        stored.insert("_id", id);
        for (key, value) in document {
            stored.insert(key, value);
        }

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id)
    }

    async fn find_and_update(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write();
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| has_id(d, &id)))
        else {
            return Ok(None);
        };

        for (key, value) in fields {
            if key != "_id" {
                document.insert(key, value);
            }
        }

        Ok(Some(document.clone()))
    }

    async fn find_and_delete(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(None);
        };

        Ok(docs
            .iter()
            .position(|d| has_id(d, &id))
            .map(|index| docs.remove(index)))
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_order() {
        let store = MemoryStore::new();
        let a = store.insert("media", doc! { "title": "a" }).await.unwrap();
        let b = store.insert("media", doc! { "title": "b" }).await.unwrap();
        assert_ne!(a, b);

        let all = store.find_all("media").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get_object_id("_id").unwrap(), a);
        assert_eq!(all[1].get_str("title").unwrap(), "b");
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all("nothing").await.unwrap().is_empty());
        assert!(store.find_by_id("nothing", ObjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_field_matches_exactly() {
        let store = MemoryStore::new();
        store.insert("media", doc! { "webURL": "/m/1" }).await.unwrap();
        store.insert("media", doc! { "webURL": "/m/10" }).await.unwrap();

        let found = store
            .find_by_field("media", "webURL", Bson::String("/m/10".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("webURL").unwrap(), "/m/10");

        let missing = store
            .find_by_field("media", "webURL", Bson::String("/m".into()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_many_ignores_unknown_ids() {
        let store = MemoryStore::new();
        let a = store.insert("media", doc! { "title": "a" }).await.unwrap();
        let b = store.insert("media", doc! { "title": "b" }).await.unwrap();

        let found = store
            .find_many_by_ids("media", &[b, ObjectId::new(), a])
            .await
            .unwrap();
        // natural order, not request order
        let titles: Vec<_> = found.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_find_and_update_returns_post_image() {
        let store = MemoryStore::new();
        let id = store
            .insert("media", doc! { "title": "old", "date": "2024" })
            .await
            .unwrap();

        let updated = store
            .find_and_update("media", id, doc! { "title": "new", "description": Bson::Null })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.get_str("title").unwrap(), "new");
        assert_eq!(updated.get_str("date").unwrap(), "2024");
        assert_eq!(updated.get("description"), Some(&Bson::Null));
        assert_eq!(updated.get_object_id("_id").unwrap(), id);
    }

    #[tokio::test]
    async fn test_find_and_update_missing_creates_nothing() {
        let store = MemoryStore::new();
        let result = store
            .find_and_update("media", ObjectId::new(), doc! { "title": "x" })
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.find_all("media").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_and_delete_returns_pre_image() {
        let store = MemoryStore::new();
        let id = store.insert("media", doc! { "title": "gone" }).await.unwrap();

        let deleted = store.find_and_delete("media", id).await.unwrap().unwrap();
        assert_eq!(deleted.get_str("title").unwrap(), "gone");
        assert!(store.find_by_id("media", id).await.unwrap().is_none());
        assert!(store.find_and_delete("media", id).await.unwrap().is_none());
    }
}
