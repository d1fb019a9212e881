//! Domain layer: book types, errors, the status state machine, and the
//! command/query services that orchestrate them over a record store.

pub mod book;
pub mod commands;
pub mod errors;
pub mod queries;
pub mod state_machine;

pub use book::{Book, BookId, BookPatch, BookStatus, NewBook, VersionToken};
pub use commands::BookCommandService;
pub use errors::{BookError, BookResult, PaginationError};
pub use queries::{BookPage, BookQueryService, SortKey};
pub use state_machine::BookStateMachine;
