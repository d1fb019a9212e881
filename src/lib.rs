// Library exports for shelfmark
//
// This allows the server binary and integration tests to use the core
// functionality directly.

pub mod config;
pub mod domain;
pub mod repositories;
pub mod server;

// Re-export the most commonly used types for convenience
pub use domain::book::{Book, BookId, BookPatch, BookStatus, NewBook, VersionToken};
pub use domain::errors::{BookError, BookResult, PaginationError};
pub use domain::state_machine::BookStateMachine;
pub use repositories::{BookRepository, InMemoryBookStore};
