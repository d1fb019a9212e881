//! Deterministic in-memory book store.
//!
//! Backs the server by default and doubles as the test store. Enforces the
//! same contracts an external store would: isbn uniqueness on insert and
//! the version-token comparison on update.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::book::{Book, BookId, NewBook, VersionToken};
use crate::domain::errors::{BookError, BookResult};
use crate::repositories::BookRepository;

struct StoreInner {
    books: BTreeMap<BookId, Book>,
    next_id: BookId,
}

/// In-memory implementation of [`BookRepository`].
#[derive(Clone)]
pub struct InMemoryBookStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryBookStore {
    /// Create an empty store. Ids are assigned starting from 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                books: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn find_by_id(&self, id: BookId) -> BookResult<Option<Book>> {
        let inner = self.inner.lock().await;
        Ok(inner.books.get(&id).cloned())
    }

    async fn list_all(&self) -> BookResult<Vec<Book>> {
        let inner = self.inner.lock().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn insert(&self, new_book: NewBook) -> BookResult<Book> {
        let mut inner = self.inner.lock().await;

        if inner.books.values().any(|b| b.isbn == new_book.isbn) {
            return Err(BookError::DuplicateIsbn {
                isbn: new_book.isbn,
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let book = Book {
            id,
            title: new_book.title,
            author: new_book.author,
            isbn: new_book.isbn,
            status: new_book.status,
            version: VersionToken::fresh(),
        };
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book, expected: &VersionToken) -> BookResult<Book> {
        let mut inner = self.inner.lock().await;

        let stored = inner
            .books
            .get_mut(&book.id)
            .ok_or(BookError::NotFound { id: book.id })?;

        if stored.version != *expected {
            return Err(BookError::Conflict { id: book.id });
        }

        let committed = Book {
            version: VersionToken::fresh(),
            ..book
        };
        *stored = committed.clone();
        Ok(committed)
    }

    async fn remove(&self, id: BookId) -> BookResult<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.books.remove(&id).is_some())
    }
}
