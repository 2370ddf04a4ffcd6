//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::service::LibraryStore;
use crate::storage::{InMemoryLibrary, Seed};
use anyhow::Result;
use axum::Router;
use axum::http::{Method, header};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the bookshelf HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::from_yaml_file("bookshelf.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    library: Option<Arc<dyn LibraryStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            library: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the server configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the library store
    ///
    /// When omitted, an in-memory library is created from the config's
    /// `seed_file`, or from the built-in catalogue.
    pub fn with_library(mut self, library: impl LibraryStore + 'static) -> Self {
        self.library = Some(Arc::new(library));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        self.config.validate()?;

        let library = match self.library.take() {
            Some(library) => library,
            None => Arc::new(Self::seed_library(&self.config)?),
        };

        Ok(ServerHost::new(self.config, library))
    }

    /// Build the final router: REST health routes, the GraphQL endpoint, CORS
    /// restricted to the configured origin, and request tracing
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);

        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list([host.config.allowed_origin_header()?]))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        let app = RestExposure::build_router(host.clone(), custom_routes)?
            .merge(GraphQLExposure::build_router(host)?)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            );

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured host and port and handles SIGTERM and SIGINT
    /// (Ctrl+C).
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let graphql_path = self.config.graphql_path.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on http://{}{}", addr, graphql_path);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn seed_library(config: &ServerConfig) -> Result<InMemoryLibrary> {
        let seed = match &config.seed_file {
            Some(path) => {
                tracing::info!(path = %path, "Loading seed data");
                Seed::from_yaml_file(path)?
            }
            None => Seed::default(),
        };

        Ok(InMemoryLibrary::from_seed(seed))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once the process is asked to stop. A signal whose handler cannot
/// be installed never fires.
async fn shutdown_signal() {
    let signal = tokio::select! {
        () = interrupt() => "SIGINT",
        () = terminate() => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down");
}

async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_build_with_defaults() {
        assert!(ServerBuilder::new().build().is_ok());
    }

    #[test]
    fn test_build_host_uses_given_library() {
        let host = ServerBuilder::new()
            .with_library(InMemoryLibrary::from_seed(Seed::empty()))
            .build_host()
            .unwrap();
        assert!(host.library.books().unwrap().is_empty());
    }

    #[test]
    fn test_build_host_loads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
authors:
  - { id: 1, name: "Frank Herbert" }
books:
  - { id: 1, name: "Dune", author_id: 1 }
"#,
        )
        .unwrap();

        let config = ServerConfig {
            seed_file: Some(file.path().to_string_lossy().into_owned()),
            ..ServerConfig::default()
        };
        let host = ServerBuilder::new().with_config(config).build_host().unwrap();

        let books = host.library.books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Dune");
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = ServerConfig {
            graphql_path: "graphql".to_string(),
            ..ServerConfig::default()
        };
        assert!(ServerBuilder::new().with_config(config).build().is_err());
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_a_signal() {
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(50), shutdown_signal()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn test_build_rejects_missing_seed_file() {
        let config = ServerConfig {
            seed_file: Some("/nonexistent/seed.yaml".to_string()),
            ..ServerConfig::default()
        };
        assert!(ServerBuilder::new().with_config(config).build_host().is_err());
    }
}
