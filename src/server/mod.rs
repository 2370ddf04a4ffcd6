//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that assembles:
//! - the GraphQL endpoint, playground and SDL export
//! - health check routes
//! - the CORS and tracing layers

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
