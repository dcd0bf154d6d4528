//! GraphQL API
//!
//! Queries and mutations live in per-entity modules under `queries/` and
//! `mutations/` and are combined with `MergedObject` in `schema.rs`.

pub mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{MutationRoot, PhotoShareSchema, QueryRoot, build_schema};
pub use types::{Collection, Media};
