//! Application state and HTTP router construction.
//!
//! Used by [main] and by the HTTP integration tests to build the Axum app.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::graphql::PhotoShareSchema;

/// Shared state for HTTP handlers.
///
/// The schema carries the [`Database`](crate::db::Database) handle as
/// resolver data, so it is the only thing handlers need.
#[derive(Clone)]
pub struct AppState {
    pub schema: PhotoShareSchema,
}

/// Build the full Axum router: /graphql plus CORS and request tracing
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL playground to browsers; other GET clients are told to POST
async fn graphiql(headers: HeaderMap) -> Response {
    let wants_page = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    if !wants_page {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            axum::Json(serde_json::json!({
                "error": "send PhotoShare queries and mutations as a JSON POST to /graphql"
            })),
        )
            .into_response();
    }

    Html(GraphiQLSource::build().endpoint("/graphql").title("PhotoShare API").finish()).into_response()
}
