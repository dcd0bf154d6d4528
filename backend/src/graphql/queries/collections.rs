use super::prelude::*;

#[derive(Default)]
pub struct CollectionQueries;

#[Object]
impl CollectionQueries {
    /// Get every collection
    async fn get_all_collections(&self, ctx: &Context<'_>) -> Result<Vec<Collection>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .collections()
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(records.into_iter().map(Collection::from).collect())
    }

    /// Get a specific collection by ID
    async fn get_collection_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Collection>> {
        let db = ctx.data_unchecked::<Database>();
        let collection_id = parse_object_id(&id, "collection")?;

        let record = db
            .collections()
            .get(collection_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Collection::from))
    }

    /// Get a collection by its web path
    #[graphql(name = "getCollectionByURL")]
    async fn get_collection_by_url(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "webURL")] web_url: String,
    ) -> Result<Option<Collection>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .collections()
            .get_by_web_url(&web_url)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(Collection::from))
    }
}
