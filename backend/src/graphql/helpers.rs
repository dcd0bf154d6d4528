// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::ID;
use mongodb::bson::oid::ObjectId;

/// Parse an API ID into a store ObjectId. `kind` names the entity in the error.
pub(crate) fn parse_object_id(id: &ID, kind: &str) -> async_graphql::Result<ObjectId> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| async_graphql::Error::new(format!("Invalid {} ID '{}': {}", kind, id.as_str(), e)))
}

/// Parse a list of API IDs, failing on the first malformed one
pub(crate) fn parse_object_ids(ids: &[ID], kind: &str) -> async_graphql::Result<Vec<ObjectId>> {
    ids.iter().map(|id| parse_object_id(id, kind)).collect()
}
