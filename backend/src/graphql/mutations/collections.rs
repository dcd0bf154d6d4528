use super::prelude::*;

#[derive(Default)]
pub struct CollectionMutations;

#[Object]
impl CollectionMutations {
    /// Create a collection from a list of media IDs.
    ///
    /// The referenced media are copied into the collection as they are now.
    /// IDs that match no media item are skipped.
    async fn create_collection(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
        media: Vec<ID>,
        #[graphql(name = "webURL")] web_url: String,
    ) -> Result<Option<Collection>> {
        let db = ctx.data_unchecked::<Database>();
        let media_ids = parse_object_ids(&media, "media")?;

        let record = db
            .collections()
            .create(CollectionInput {
                title,
                description,
                media_ids,
                web_url,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if let Some(ref r) = record {
            tracing::info!(
                collection_id = %r.id,
                media_count = r.media.len(),
                "Collection created"
            );
        }

        Ok(record.map(Collection::from))
    }

    /// Replace every field of a collection, re-copying the listed media
    async fn update_collection(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: String,
        description: Option<String>,
        media: Vec<ID>,
        #[graphql(name = "webURL")] web_url: String,
    ) -> Result<Option<Collection>> {
        let db = ctx.data_unchecked::<Database>();
        let collection_id = parse_object_id(&id, "collection")?;
        let media_ids = parse_object_ids(&media, "media")?;

        let record = db
            .collections()
            .update(
                collection_id,
                CollectionInput {
                    title,
                    description,
                    media_ids,
                    web_url,
                },
            )
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Collection::from))
    }

    /// Delete a collection, returning it as it was before deletion
    async fn delete_collection(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Collection>> {
        let db = ctx.data_unchecked::<Database>();
        let collection_id = parse_object_id(&id, "collection")?;

        let record = db
            .collections()
            .delete(collection_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Collection::from))
    }
}
