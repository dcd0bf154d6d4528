use super::prelude::*;

#[derive(Default)]
pub struct MediaQueries;

#[Object]
impl MediaQueries {
    /// Get every media item
    async fn get_all_media(&self, ctx: &Context<'_>) -> Result<Vec<Media>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .media()
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(records.into_iter().map(Media::from).collect())
    }

    /// Get a specific media item by ID
    async fn get_media_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Media>> {
        let db = ctx.data_unchecked::<Database>();
        let media_id = parse_object_id(&id, "media")?;

        let record = db
            .media()
            .get(media_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Media::from))
    }

    /// Get a media item by its web path
    #[graphql(name = "getMediaByURL")]
    async fn get_media_by_url(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "webURL")] web_url: String,
    ) -> Result<Option<Media>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .media()
            .get_by_web_url(&web_url)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Media::from))
    }
}
