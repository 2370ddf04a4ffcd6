//! Core module containing the library's entities, relationships and sorting

pub mod entity;
pub mod error;
pub mod relations;
pub mod service;
pub mod sort;

pub use entity::{Author, AuthorId, Book, BookId, Entity, NewBook};
pub use error::{BookshelfError, ConfigError, StorageError, ValidationError};
pub use service::LibraryStore;
pub use sort::{
    BookField, RawSortCriterion, SortCriterion, SortOrder, Sortable, resolve_criteria,
    sort_records,
};
