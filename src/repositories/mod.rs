//! Record store abstraction for books.
//!
//! Trait-based store interface enabling dependency injection and
//! testability in the domain layer. The store owns id assignment, the isbn
//! uniqueness invariant, and the version-token comparison that detects
//! lost-update races.

use async_trait::async_trait;

use crate::domain::book::{Book, BookId, NewBook, VersionToken};
use crate::domain::errors::BookResult;

pub mod memory;

pub use memory::InMemoryBookStore;

/// Repository abstraction for book records.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Look up a book by id.
    async fn find_by_id(&self, id: BookId) -> BookResult<Option<Book>>;

    /// All books, in no particular order. Ordering is the query pipeline's
    /// concern, not the store's.
    async fn list_all(&self) -> BookResult<Vec<Book>>;

    /// Insert a new book, assigning its id and initial version token.
    ///
    /// Fails with `DuplicateIsbn` when another record already carries the
    /// same isbn.
    async fn insert(&self, new_book: NewBook) -> BookResult<Book>;

    /// Commit field changes to an existing book.
    ///
    /// The stored version token must still equal `expected`; a mismatch is
    /// a `Conflict` and the record is left untouched. On success the token
    /// is advanced to a fresh value and the committed record returned.
    async fn update(&self, book: Book, expected: &VersionToken) -> BookResult<Book>;

    /// Remove a book. Returns whether the id existed.
    async fn remove(&self, id: BookId) -> BookResult<bool>;
}
