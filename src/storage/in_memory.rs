//! In-memory implementation of LibraryStore

use crate::core::entity::{Author, Book, BookId, NewBook};
use crate::core::error::StorageError;
use crate::core::service::LibraryStore;
use crate::storage::seed::Seed;
use std::sync::{Arc, RwLock};

/// In-memory library
///
/// Authors are fixed at construction. Books live behind a `RwLock` so that
/// appends compute `len + 1` and push under a single write guard.
#[derive(Clone)]
pub struct InMemoryLibrary {
    authors: Arc<[Author]>,
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryLibrary {
    /// Create a library from a seed
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            authors: seed.authors.into(),
            books: Arc::new(RwLock::new(seed.books)),
        }
    }

    /// Create a library holding the built-in catalogue
    pub fn seeded() -> Self {
        Self::from_seed(Seed::default())
    }
}

impl Default for InMemoryLibrary {
    fn default() -> Self {
        Self::seeded()
    }
}

impl LibraryStore for InMemoryLibrary {
    fn authors(&self) -> Result<Vec<Author>, StorageError> {
        Ok(self.authors.to_vec())
    }

    fn books(&self) -> Result<Vec<Book>, StorageError> {
        let books = self.books.read().map_err(|_| StorageError::LockPoisoned {
            collection: "books",
            mode: "read",
        })?;

        Ok(books.clone())
    }

    fn append_book(&self, draft: NewBook) -> Result<Book, StorageError> {
        let mut books = self.books.write().map_err(|_| StorageError::LockPoisoned {
            collection: "books",
            mode: "write",
        })?;

        let id = next_book_id(books.len())?;
        let book = draft.into_book(id);
        books.push(book.clone());

        Ok(book)
    }
}

/// Id of the book appended after `len` existing books
fn next_book_id(len: usize) -> Result<BookId, StorageError> {
    BookId::try_from(len)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or(StorageError::IdSpaceExhausted {
            collection: "books",
            len,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_seeded_library() {
        let library = InMemoryLibrary::seeded();
        assert_eq!(library.authors().unwrap().len(), 3);
        assert_eq!(library.books().unwrap().len(), 8);
    }

    #[test]
    fn test_find_by_id() {
        let library = InMemoryLibrary::seeded();

        let author = library.find_author(2).unwrap().unwrap();
        assert_eq!(author.name, "J. R. R. Tolkien");

        let book = library.find_book(5).unwrap().unwrap();
        assert_eq!(book.name, "The Two Towers");

        assert!(library.find_author(99).unwrap().is_none());
        assert!(library.find_book(0).unwrap().is_none());
    }

    #[test]
    fn test_append_assigns_length_plus_one() {
        let library = InMemoryLibrary::seeded();

        let book = library.append_book(NewBook::new("New Book", 1)).unwrap();
        assert_eq!(book.id, 9);
        assert_eq!(book.author_id, 1);

        let books = library.books().unwrap();
        assert_eq!(books.len(), 9);
        assert_eq!(books.last(), Some(&book));
    }

    #[test]
    fn test_next_book_id_bounds() {
        assert_eq!(next_book_id(0).unwrap(), 1);
        assert_eq!(next_book_id(8).unwrap(), 9);
        assert_eq!(next_book_id((i32::MAX - 1) as usize).unwrap(), i32::MAX);

        let err = next_book_id(i32::MAX as usize).unwrap_err();
        assert!(matches!(
            err,
            StorageError::IdSpaceExhausted { collection: "books", .. }
        ));
        assert!(next_book_id(usize::MAX).is_err());
    }

    #[test]
    fn test_append_visible_through_relationship() {
        let library = InMemoryLibrary::seeded();
        let book = library.append_book(NewBook::new("New Book", 1)).unwrap();

        let rowling = library.find_author(1).unwrap().unwrap();
        let books = library.books_of(&rowling).unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(books.last(), Some(&book));
    }

    #[test]
    fn test_append_with_dangling_author() {
        let library = InMemoryLibrary::seeded();
        let book = library.append_book(NewBook::new("Ghost", 42)).unwrap();

        assert!(library.author_of(&book).unwrap().is_none());
        assert_eq!(library.authors().unwrap().len(), 3);
    }

    #[test]
    fn test_clones_share_books() {
        let library = InMemoryLibrary::seeded();
        let other = library.clone();

        other.append_book(NewBook::new("Shared", 2)).unwrap();
        assert_eq!(library.books().unwrap().len(), 9);
    }

    #[test]
    fn test_concurrent_appends_get_unique_ids() {
        let library = InMemoryLibrary::from_seed(Seed::empty());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let library = library.clone();
                thread::spawn(move || {
                    library
                        .append_book(NewBook::new(format!("Book {}", i), 1))
                        .unwrap()
                })
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().id).collect();
        ids.sort();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
