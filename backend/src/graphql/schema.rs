//! GraphQL schema definition with queries and mutations

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::mutations::{CollectionMutations, MediaMutations};
use super::queries::{CollectionQueries, MediaQueries};

/// The GraphQL schema type
pub type PhotoShareSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MediaQueries, CollectionQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(MediaMutations, CollectionMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database) -> PhotoShareSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(db)
        .extension(Tracing)
        .finish()
}
