//! GraphQL API exposure
//!
//! This module provides the GraphQL endpoint, the interactive playground and
//! the SDL export. The schema itself lives in [`schema`].

pub mod schema;

use crate::server::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::Extension,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

pub use schema::{
    AuthorNode, BookNode, BookshelfSchema, MutationRoot, QueryRoot, SharedLibrary, SortInput,
    build_schema,
};

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Routes, relative to the configured `graphql_path` (default `/graphql`):
    /// - `POST {path}` - queries and mutations
    /// - `GET {path}` - GraphQL Playground (when enabled)
    /// - `GET {path}/schema` - schema SDL
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let path = host.config.graphql_path.clone();

        let endpoint = if host.config.playground {
            let html = playground_source(GraphQLPlaygroundConfig::new(&path));
            post(graphql_handler).get(move || {
                let html = html.clone();
                async move { Html(html) }
            })
        } else {
            post(graphql_handler)
        };

        let router = Router::new()
            .route(&path, endpoint)
            .route(&format!("{}/schema", path), get(graphql_schema))
            .layer(Extension(host.schema.clone()));

        Ok(router)
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for GraphQL schema SDL export
async fn graphql_schema(Extension(schema): Extension<BookshelfSchema>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        schema.sdl(),
    )
}
