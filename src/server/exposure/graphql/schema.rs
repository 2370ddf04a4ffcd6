//! GraphQL schema for the library
//!
//! The type graph mirrors the store: `Author` and `Book` objects whose
//! relationship fields (`Author.books`, `Book.author`) are resolved only when a
//! query selects them, by scanning the store's current snapshot.
//!
//! ```graphql
//! type Query {
//!   author(id: Int): Author
//!   book(id: Int): Book
//!   authors: [Author]
//!   getBooks(sort: SortInput): [Book]
//! }
//!
//! type Mutation {
//!   addBook(name: String!, authorId: Int!): Book
//! }
//! ```
//!
//! Lists and list elements are nullable on the wire. Resolvers always fill
//! them, but `sortCriteria` may carry `null` entries, which are skipped.

use crate::core::entity::{Author, Book, NewBook};
use crate::core::error::{BookshelfError, StorageError};
use crate::core::service::LibraryStore;
use crate::core::sort::{BookField, RawSortCriterion, resolve_criteria, sort_records};
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, Object, Result, Schema,
};
use std::sync::Arc;
use validator::Validate;

/// Library store shared by every resolver through the schema data
pub type SharedLibrary = Arc<dyn LibraryStore>;

/// The executable schema
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a library store
pub fn build_schema(library: SharedLibrary) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

fn library<'a>(ctx: &Context<'a>) -> Result<&'a SharedLibrary> {
    ctx.data::<SharedLibrary>()
}

fn storage_error(err: StorageError) -> async_graphql::Error {
    BookshelfError::from(err).extend()
}

/// `[T]` in the schema
type NullableList<T> = Option<Vec<Option<T>>>;

fn nullable_list<T, N>(records: Vec<T>, node: impl Fn(T) -> N) -> NullableList<N> {
    Some(records.into_iter().map(|r| Some(node(r))).collect())
}

/// Author of a book
pub struct AuthorNode(pub Author);

#[Object(name = "Author")]
impl AuthorNode {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books written by this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Result<NullableList<BookNode>> {
        let books = library(ctx)?.books_of(&self.0).map_err(storage_error)?;
        Ok(nullable_list(books, BookNode))
    }
}

/// Book details with author
pub struct BookNode(pub Book);

#[Object(name = "Book")]
impl BookNode {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The author, or null when `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorNode>> {
        let author = library(ctx)?.author_of(&self.0).map_err(storage_error)?;
        Ok(author.map(AuthorNode))
    }
}

/// One sort criterion. Unknown fields are ignored; `order` is `ASC` or `DESC`.
#[derive(InputObject, Debug, Clone, Default)]
pub struct SortCriterionInput {
    pub field: Option<String>,
    pub order: Option<String>,
}

/// Ordered list of sort criteria, compared lexicographically
#[derive(InputObject, Debug, Clone, Default)]
pub struct SortInput {
    pub sort_criteria: NullableList<SortCriterionInput>,
}

impl SortInput {
    fn raw_criteria(&self) -> Vec<RawSortCriterion> {
        self.sort_criteria
            .iter()
            .flatten()
            .flatten()
            .map(|c| RawSortCriterion {
                field: c.field.clone(),
                order: c.order.clone(),
            })
            .collect()
    }
}

/// Root query
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<AuthorNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let author = library(ctx)?.find_author(id).map_err(storage_error)?;
        tracing::debug!(id, found = author.is_some(), "Resolved author");
        Ok(author.map(AuthorNode))
    }

    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<BookNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let book = library(ctx)?.find_book(id).map_err(storage_error)?;
        tracing::debug!(id, found = book.is_some(), "Resolved book");
        Ok(book.map(BookNode))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<NullableList<AuthorNode>> {
        let authors = library(ctx)?.authors().map_err(storage_error)?;
        Ok(nullable_list(authors, AuthorNode))
    }

    /// List of all books, optionally sorted
    async fn get_books(
        &self,
        ctx: &Context<'_>,
        sort: Option<SortInput>,
    ) -> Result<NullableList<BookNode>> {
        let books = library(ctx)?.books().map_err(storage_error)?;

        let raw = sort.map(|s| s.raw_criteria()).unwrap_or_default();
        let criteria = resolve_criteria::<BookField>(&raw);
        let sorted = sort_records(&books, &criteria);

        Ok(nullable_list(sorted, BookNode))
    }
}

/// Root mutation
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book. `authorId` is not checked against existing authors.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> Result<Option<BookNode>> {
        let draft = NewBook::new(name, author_id);
        draft
            .validate()
            .map_err(|e| BookshelfError::from(e).extend())?;

        let book = library(ctx)?.append_book(draft).map_err(storage_error)?;
        tracing::info!(id = book.id, author_id = book.author_id, "Book added");

        Ok(Some(BookNode(book)))
    }
}
