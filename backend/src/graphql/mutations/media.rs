use super::prelude::*;

#[derive(Default)]
pub struct MediaMutations;

#[Object]
impl MediaMutations {
    /// Create a new media item
    #[allow(clippy::too_many_arguments)]
    async fn create_media(
        &self,
        ctx: &Context<'_>,
        date: String,
        title: String,
        upload_date: String,
        #[graphql(name = "type")] media_type: String,
        #[graphql(name = "contentURL")] content_url: String,
        #[graphql(name = "thumbnailURL")] thumbnail_url: String,
        #[graphql(name = "webURL")] web_url: String,
        description: Option<String>,
    ) -> Result<Option<Media>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .media()
            .create(MediaFields {
                date,
                title,
                upload_date,
                media_type,
                content_url,
                thumbnail_url,
                web_url,
                description,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if let Some(ref r) = record {
            tracing::info!(media_id = %r.id, title = %r.title, "Media created");
        }

        Ok(record.map(Media::from))
    }

    /// Replace every field of a media item.
    ///
    /// Returns null when no media item has the given ID. Collections that
    /// already contain this media keep their earlier copy.
    #[allow(clippy::too_many_arguments)]
    async fn update_media(
        &self,
        ctx: &Context<'_>,
        id: ID,
        #[graphql(name = "webURL")] web_url: String,
        date: String,
        title: String,
        upload_date: String,
        #[graphql(name = "type")] media_type: String,
        #[graphql(name = "contentURL")] content_url: String,
        #[graphql(name = "thumbnailURL")] thumbnail_url: String,
        description: Option<String>,
    ) -> Result<Option<Media>> {
        let db = ctx.data_unchecked::<Database>();
        let media_id = parse_object_id(&id, "media")?;

        let record = db
            .media()
            .update(
                media_id,
                MediaFields {
                    date,
                    title,
                    upload_date,
                    media_type,
                    content_url,
                    thumbnail_url,
                    web_url,
                    description,
                },
            )
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Media::from))
    }

    /// Delete a media item, returning it as it was before deletion
    async fn delete_media(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Media>> {
        let db = ctx.data_unchecked::<Database>();
        let media_id = parse_object_id(&id, "media")?;

        let record = db
            .media()
            .delete(media_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        match record {
            Some(r) => {
                tracing::info!(media_id = %r.id, "Media deleted");
                Ok(Some(Media::from(r)))
            }
            None => Ok(None),
        }
    }
}
