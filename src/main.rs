//! Bookshelf GraphQL server
//!
//! Serves the library over GraphQL at `/graphql`, with the playground on the
//! same path and the schema SDL at `/graphql/schema`.

use bookshelf::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "GraphQL server for an in-memory library")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "BOOKSHELF_CONFIG")]
    config: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_yaml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting bookshelf v{} (CORS origin: {})",
        env!("CARGO_PKG_VERSION"),
        config.allowed_origin
    );

    ServerBuilder::new().with_config(config).serve().await
}
