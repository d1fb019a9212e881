//! Book command service - handles mutations (writes)
//!
//! All book state modifications go through this service: creation, field
//! edits with status-transition validation, and deletion. It follows the
//! CQRS pattern; reads live in `BookQueryService`.

use std::sync::Arc;

use crate::domain::book::{Book, BookId, BookPatch, NewBook, VersionToken};
use crate::domain::errors::{BookError, BookResult};
use crate::domain::state_machine::BookStateMachine;
use crate::repositories::BookRepository;

fn require_non_empty(field: &str, value: &str) -> BookResult<()> {
    if value.trim().is_empty() {
        return Err(BookError::Validation {
            reason: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Command service for book mutations.
pub struct BookCommandService {
    repo: Arc<dyn BookRepository>,
}

impl BookCommandService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Create a new book.
    ///
    /// The store assigns the id and the initial version token, and rejects
    /// the insert with `DuplicateIsbn` when the isbn already exists.
    pub async fn create_book(&self, new_book: NewBook) -> BookResult<Book> {
        require_non_empty("title", &new_book.title)?;
        require_non_empty("author", &new_book.author)?;
        require_non_empty("isbn", &new_book.isbn)?;

        let book = self.repo.insert(new_book).await?;
        tracing::info!(id = book.id, isbn = %book.isbn, "book created");
        Ok(book)
    }

    /// Apply field changes to an existing book.
    ///
    /// A status change is consulted against the state machine before any
    /// field is touched. When `expected` is supplied, the stored version
    /// token must still match it; the store re-checks the token at commit
    /// time, so two writers racing on the same record see at most one
    /// success and one `Conflict`.
    pub async fn update_book(
        &self,
        id: BookId,
        patch: BookPatch,
        expected: Option<&VersionToken>,
    ) -> BookResult<Book> {
        let mut book = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound { id })?;

        if let Some(expected) = expected {
            if *expected != book.version {
                return Err(BookError::Conflict { id });
            }
        }

        if let Some(requested) = patch.status {
            if requested != book.status
                && !BookStateMachine::is_valid_transition(book.status, requested)
            {
                return Err(BookError::InvalidTransition {
                    from: book.status,
                    to: requested,
                });
            }
        }

        if let Some(title) = patch.title {
            require_non_empty("title", &title)?;
            book.title = title;
        }
        if let Some(author) = patch.author {
            require_non_empty("author", &author)?;
            book.author = author;
        }
        if let Some(status) = patch.status {
            book.status = status;
        }

        let loaded_version = book.version;
        let updated = self.repo.update(book, &loaded_version).await?;
        tracing::info!(id, status = %updated.status, "book updated");
        Ok(updated)
    }

    /// Remove a book from the store.
    pub async fn delete_book(&self, id: BookId) -> BookResult<()> {
        if !self.repo.remove(id).await? {
            return Err(BookError::NotFound { id });
        }
        tracing::info!(id, "book deleted");
        Ok(())
    }
}
