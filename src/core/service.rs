//! Store trait for the library's author and book collections

use crate::core::entity::{Author, AuthorId, Book, BookId, NewBook, find_by_id};
use crate::core::error::StorageError;
use crate::core::relations;

/// Owned access to the library collections
///
/// Authors are read-only. Books are append-only: there is no update or
/// delete path. Every read returns a snapshot of the current state, and
/// implementations must make [`append_book`](Self::append_book) atomic with
/// respect to id assignment.
///
/// Operations are synchronous in-memory computations and never yield.
pub trait LibraryStore: Send + Sync {
    /// All authors, in store order
    fn authors(&self) -> Result<Vec<Author>, StorageError>;

    /// All books, in insertion order
    fn books(&self) -> Result<Vec<Book>, StorageError>;

    /// Append a book, assigning `id = current length + 1`
    fn append_book(&self, draft: NewBook) -> Result<Book, StorageError>;

    /// First author with the given id
    fn find_author(&self, id: AuthorId) -> Result<Option<Author>, StorageError> {
        Ok(find_by_id(&self.authors()?, id))
    }

    /// First book with the given id
    fn find_book(&self, id: BookId) -> Result<Option<Book>, StorageError> {
        Ok(find_by_id(&self.books()?, id))
    }

    /// Books written by `author`, in insertion order
    fn books_of(&self, author: &Author) -> Result<Vec<Book>, StorageError> {
        Ok(relations::books_of(&self.books()?, author))
    }

    /// The author of `book`, if its foreign key resolves
    fn author_of(&self, book: &Book) -> Result<Option<Author>, StorageError> {
        Ok(relations::author_of(&self.authors()?, book))
    }
}
