//! Domain errors.
//!
//! Typed errors for the domain layer. Every variant is a local, recoverable
//! condition surfaced to the caller; none is retried at this layer.

use crate::domain::book::{BookId, BookStatus};

/// Result type for domain operations.
pub type BookResult<T> = Result<T, BookError>;

/// Main domain error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    /// Malformed field on a create or update payload.
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    /// ISBN collision on create.
    #[error("A book with ISBN '{isbn}' already exists")]
    DuplicateIsbn { isbn: String },

    /// Unknown book id.
    #[error("Book not found: {id}")]
    NotFound { id: BookId },

    /// Requested status edge is not in the allowed set.
    #[error("Invalid status change from {from} to {to}")]
    InvalidTransition { from: BookStatus, to: BookStatus },

    /// Pagination parameter out of range.
    #[error("{0}")]
    OutOfRange(#[from] PaginationError),

    /// Version token moved since the record was loaded. The caller may
    /// retry after re-reading; the write is never silently resolved.
    #[error("Concurrent update detected for book {id}")]
    Conflict { id: BookId },

    /// Infrastructure failure surfaced by the store.
    #[error("Storage error: {reason}")]
    Storage { reason: String },
}

/// Caller-contract violations on the pagination window.
///
/// The message text is part of the contract and is surfaced verbatim to the
/// dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Page must be greater than zero.")]
    PageTooSmall,

    #[error("Page size must be greater than zero.")]
    PageSizeTooSmall,
}
