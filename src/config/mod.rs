//! Configuration loading and management

use crate::core::error::ConfigError;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// TCP port
    pub port: u16,

    /// Path of the GraphQL endpoint
    pub graphql_path: String,

    /// The single origin allowed by the CORS policy
    pub allowed_origin: String,

    /// Serve the interactive GraphQL Playground on `GET graphql_path`
    pub playground: bool,

    /// Default log filter when `RUST_LOG` is not set
    pub log_filter: String,

    /// Optional YAML file replacing the built-in seed data
    pub seed_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            graphql_path: "/graphql".to_string(),
            allowed_origin: "http://localhost:5173".to_string(),
            playground: true,
            log_filter: "info".to_string(),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Address to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The allowed CORS origin as a header value
    pub fn allowed_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| ConfigError::InvalidValue {
            field: "allowed_origin".to_string(),
            value: self.allowed_origin.clone(),
            message: e.to_string(),
        })
    }

    /// Check that the configuration can be served
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.graphql_path.starts_with('/') || self.graphql_path.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "graphql_path".to_string(),
                value: self.graphql_path.clone(),
                message: "must start with '/' and name a route".to_string(),
            });
        }

        if self.allowed_origin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "allowed_origin".to_string(),
                value: self.allowed_origin.clone(),
                message: "must not be empty".to_string(),
            });
        }
        self.allowed_origin_header()?;

        Ok(())
    }
}
