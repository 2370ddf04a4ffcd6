//! Entity types for the library: authors and the books that reference them

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier of an author, assigned externally when the store is seeded
pub type AuthorId = i32;

/// Identifier of a book, assigned by the store on insertion
pub type BookId = i32;

/// A record held by the library store, addressable by its integer id.
///
/// Relationships between records are expressed by value (foreign keys), never
/// by reference, so implementors are plain cloneable data.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
}

/// An author. Owns nothing; books point at it through [`Book::author_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Author {
    fn id(&self) -> i32 {
        self.id
    }
}

/// A book.
///
/// `author_id` should name an existing [`Author`], but nothing enforces it: a
/// dangling reference is legal and resolves to no author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author_id: AuthorId,
}

impl Book {
    pub fn new(id: BookId, name: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}

impl Entity for Book {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Payload for appending a book. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub author_id: AuthorId,
}

impl NewBook {
    pub fn new(name: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            name: name.into(),
            author_id,
        }
    }

    /// Materialize the draft with the id chosen by the store
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            name: self.name,
            author_id: self.author_id,
        }
    }
}

/// Return the first record whose id matches
pub fn find_by_id<T: Entity>(records: &[T], id: i32) -> Option<T> {
    records.iter().find(|record| record.id() == id).cloned()
}
