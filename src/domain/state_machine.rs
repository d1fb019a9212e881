//! Book status state machine.
//!
//! Enforces which status transitions are legal for a physical book.
//!
//! State machine:
//! ```text
//!   OnShelf → Borrowed → Returned → OnShelf
//!   OnShelf → Damaged             Returned → Damaged
//!   Damaged → OnShelf
//! ```
//!
//! The edge set models the physical handling workflow: shelve→lend,
//! lend→return, return→reshelve or return→damage-report, damage→repair and
//! reshelve. A book cannot be borrowed while damaged, nor marked damaged
//! while it is out with a borrower.

use crate::domain::book::BookStatus;

/// Pure business logic for book status transitions.
///
/// Stateless validator with no side effects; safe to call concurrently
/// without coordination.
pub struct BookStateMachine;

impl BookStateMachine {
    /// Check whether moving from `current` to `requested` is legal.
    ///
    /// Exactly six ordered pairs are allowed; everything else, including a
    /// request for the status the book already has, is denied.
    pub fn is_valid_transition(current: BookStatus, requested: BookStatus) -> bool {
        use BookStatus::*;

        matches!(
            (current, requested),
            (OnShelf, Borrowed)
                | (OnShelf, Damaged)
                | (Borrowed, Returned)
                | (Returned, OnShelf)
                | (Returned, Damaged)
                | (Damaged, OnShelf)
        )
    }

    /// All statuses reachable in one legal transition from `from`.
    pub fn valid_targets(from: BookStatus) -> Vec<BookStatus> {
        use BookStatus::*;

        match from {
            OnShelf => vec![Borrowed, Damaged],
            Borrowed => vec![Returned],
            Returned => vec![OnShelf, Damaged],
            Damaged => vec![OnShelf],
        }
    }
}
