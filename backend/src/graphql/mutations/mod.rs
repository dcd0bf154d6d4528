pub mod collections;
pub mod media;

pub use collections::CollectionMutations;
pub use media::MediaMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::db::{CollectionInput, Database, MediaFields};
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
}
