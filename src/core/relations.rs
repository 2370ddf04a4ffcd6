//! Author/book relationship resolution
//!
//! Both directions are derived from the book's foreign key on every call.
//! Nothing is indexed or cached: the dataset is small and append-only, so a
//! linear scan over the current snapshot is enough.

use super::entity::{Author, Book};

/// Books written by `author`, in book collection order
pub fn books_of(books: &[Book], author: &Author) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.author_id == author.id)
        .cloned()
        .collect()
}

/// The author of `book`, or `None` if its foreign key dangles
pub fn author_of(authors: &[Author], book: &Book) -> Option<Author> {
    authors
        .iter()
        .find(|author| author.id == book.author_id)
        .cloned()
}
