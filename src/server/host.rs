//! Server host for transport-agnostic API exposure
//!
//! The `ServerHost` owns everything an exposure needs: the configuration, the
//! library store and the executable GraphQL schema built over it.

use crate::config::ServerConfig;
use crate::core::service::LibraryStore;
use crate::server::exposure::graphql::{BookshelfSchema, build_schema};
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(config, Arc::new(InMemoryLibrary::seeded())));
/// let rest_app = RestExposure::build_router(host.clone(), vec![])?;
/// let graphql_app = GraphQLExposure::build_router(host)?;
/// ```
pub struct ServerHost {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// The library store shared by all resolvers
    pub library: Arc<dyn LibraryStore>,

    /// GraphQL schema over `library`, built once
    pub schema: BookshelfSchema,
}

impl ServerHost {
    /// Build the host and its schema
    pub fn new(config: ServerConfig, library: Arc<dyn LibraryStore>) -> Self {
        let schema = build_schema(library.clone());

        Self {
            config: Arc::new(config),
            library,
            schema,
        }
    }

    /// Check if the library can be read
    pub fn is_ready(&self) -> bool {
        self.library.books().is_ok()
    }
}
