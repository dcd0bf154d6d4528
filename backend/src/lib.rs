//! PhotoShare backend
//!
//! GraphQL API over a document store holding media items and the collections
//! that group them. All operations are exposed at /graphql.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod logging;

pub use app::{AppState, build_app};
