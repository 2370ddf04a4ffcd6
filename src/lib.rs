//! # Bookshelf
//!
//! A GraphQL server over a small in-memory library of authors and books.
//!
//! ## Features
//!
//! - **Typed graph**: `Author` and `Book` with lazily resolved relationships
//! - **Multi-criteria sorting**: lexicographic ordering across any number of
//!   `(field, ASC | DESC)` criteria, stable on ties
//! - **Append-only mutation**: `addBook` assigns ids atomically
//! - **Configuration-Based**: server settings and seed data from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookshelf::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_library(InMemoryLibrary::seeded())
//!         .serve()
//!         .await
//! }
//! ```
//!
//! ```graphql
//! {
//!   getBooks(sort: { sortCriteria: [{ field: "authorId", order: "DESC" }, { field: "name" }] }) {
//!     id
//!     name
//!     author { name }
//!   }
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Author, AuthorId, Book, BookId, Entity, NewBook},
        error::{BookshelfError, ConfigError, StorageError, ValidationError},
        service::LibraryStore,
        sort::{
            BookField, RawSortCriterion, SortCriterion, SortOrder, Sortable,
            resolve_criteria, sort_records,
        },
    };

    // === Storage ===
    pub use crate::storage::{InMemoryLibrary, Seed};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::exposure::graphql::{BookshelfSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
}
