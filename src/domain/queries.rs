//! Book query service - handles reads (queries)
//!
//! Sorting and pagination over the book collection, plus the query service
//! that runs them against the record store. Queries return domain data but
//! never modify state.
//!
//! The pipeline operates on a materialized `Vec<Book>` handed over by the
//! store abstraction, so ordering and pagination semantics are identical
//! regardless of how the store retrieves its records.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::book::{Book, BookId};
use crate::domain::errors::{BookError, BookResult, PaginationError};
use crate::repositories::BookRepository;

/// Recognized sort fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    Isbn,
    Status,
    /// Fallback: ascending id.
    Id,
}

impl SortKey {
    /// Parse a caller-supplied sort field, case-insensitively. Anything
    /// unrecognized falls back to id order rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "author" => Self::Author,
            "isbn" => Self::Isbn,
            "status" => Self::Status,
            _ => Self::Id,
        }
    }
}

/// Sort books ascending by the selected field, ties broken by ascending id.
///
/// The id tie-break makes the order total, so page boundaries are
/// deterministic across repeated calls against an unchanged collection.
pub fn sort_books(books: &mut [Book], key: SortKey) {
    match key {
        SortKey::Title => books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id))),
        SortKey::Author => books.sort_by(|a, b| a.author.cmp(&b.author).then(a.id.cmp(&b.id))),
        SortKey::Isbn => books.sort_by(|a, b| a.isbn.cmp(&b.isbn).then(a.id.cmp(&b.id))),
        SortKey::Status => books.sort_by(|a, b| a.status.cmp(&b.status).then(a.id.cmp(&b.id))),
        SortKey::Id => books.sort_by_key(|b| b.id),
    }
}

/// Take the 1-based `page` of `page_size` elements from an already-sorted
/// collection.
///
/// A page past the end of the collection is an empty result, not an error.
/// `page == 0` or `page_size == 0` is a caller-contract violation and fails
/// fast with the offending parameter named in the message.
pub fn paginate(page: u32, page_size: u32, books: Vec<Book>) -> Result<Vec<Book>, PaginationError> {
    if page < 1 {
        return Err(PaginationError::PageTooSmall);
    }
    if page_size < 1 {
        return Err(PaginationError::PageSizeTooSmall);
    }

    let offset = (page as usize - 1) * page_size as usize;
    Ok(books
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .collect())
}

/// One page of books plus the full collection size.
///
/// `total_items` reflects the whole sorted collection, independent of the
/// page window, so callers can compute page counts.
#[derive(Debug, Clone, Serialize)]
pub struct BookPage {
    pub items: Vec<Book>,
    pub total_items: usize,
    pub page: u32,
    pub page_size: u32,
}

/// Query service for book reads.
///
/// Follows the CQRS pattern: it never modifies book state. Use
/// `BookCommandService` for mutations.
pub struct BookQueryService {
    repo: Arc<dyn BookRepository>,
}

impl BookQueryService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Get a book by id.
    pub async fn get_book(&self, id: BookId) -> BookResult<Book> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound { id })
    }

    /// List books sorted by `sort_by` and windowed to the requested page.
    pub async fn list_books(
        &self,
        sort_by: &str,
        page: u32,
        page_size: u32,
    ) -> BookResult<BookPage> {
        let mut books = self.repo.list_all().await?;
        let total_items = books.len();

        sort_books(&mut books, SortKey::parse(sort_by));
        let items = paginate(page, page_size, books)?;

        Ok(BookPage {
            items,
            total_items,
            page,
            page_size,
        })
    }
}
