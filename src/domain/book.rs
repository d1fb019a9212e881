//! Book domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned book identifier, immutable after creation.
pub type BookId = i64;

/// Handling state of a physical book.
///
/// Declaration order is the ordinal order used when sorting by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    OnShelf,
    Borrowed,
    Returned,
    Damaged,
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::OnShelf
    }
}

impl BookStatus {
    /// Numeric wire code for stores that persist integers.
    pub fn code(self) -> i64 {
        match self {
            BookStatus::OnShelf => 0,
            BookStatus::Borrowed => 1,
            BookStatus::Returned => 2,
            BookStatus::Damaged => 3,
        }
    }

    /// Decode a numeric wire code. Unknown codes yield `None`; unrecognized
    /// input is a denial, never a panic.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BookStatus::OnShelf),
            1 => Some(BookStatus::Borrowed),
            2 => Some(BookStatus::Returned),
            3 => Some(BookStatus::Damaged),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookStatus::OnShelf => "OnShelf",
            BookStatus::Borrowed => "Borrowed",
            BookStatus::Returned => "Returned",
            BookStatus::Damaged => "Damaged",
        };
        f.write_str(name)
    }
}

/// Opaque optimistic-concurrency token.
///
/// A fresh token is drawn on every committed write. Tokens are compared only
/// for equality; callers cannot predict the next value, so a stale token can
/// never appear current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionToken(Uuid);

impl VersionToken {
    /// Draw a new, unpredictable token.
    pub fn fresh() -> Self {
        VersionToken(Uuid::new_v4())
    }
}

impl std::fmt::Display for VersionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A book record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Unique across all books in the store.
    pub isbn: String,
    pub status: BookStatus,
    /// Advanced by the store on every committed mutation.
    pub version: VersionToken,
}

/// Payload for creating a book. The store assigns the id and the initial
/// version token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

/// Field changes for an update. `None` leaves the stored value unchanged.
/// Ephemeral, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<BookStatus>,
}
