//! HTTP dispatch layer.
//!
//! Thin axum surface over the domain services. Translates payloads into
//! domain values, query strings into sort/pagination parameters, and domain
//! errors into transport responses. No business logic lives here.
//!
//! ## Routes
//!
//! ```text
//! GET    /books          - sorted, paginated listing
//! POST   /books          - create
//! GET    /books/{id}     - fetch one
//! PUT    /books/{id}     - update fields / status
//! DELETE /books/{id}     - remove
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::book::{Book, BookId, BookPatch, BookStatus, NewBook, VersionToken};
use crate::domain::commands::BookCommandService;
use crate::domain::errors::BookError;
use crate::domain::queries::{BookPage, BookQueryService};
use crate::repositories::BookRepository;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    commands: Arc<BookCommandService>,
    queries: Arc<BookQueryService>,
    default_page_size: u32,
}

impl AppState {
    pub fn new(repo: Arc<dyn BookRepository>, config: &AppConfig) -> Self {
        Self {
            commands: Arc::new(BookCommandService::new(repo.clone())),
            queries: Arc::new(BookQueryService::new(repo)),
            default_page_size: config.default_page_size,
        }
    }
}

/// Build the complete axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(state)
}

/// Map a domain error onto its transport status.
///
/// Error bodies carry the domain message verbatim; callers depend on the
/// literal text for invalid transitions and pagination violations.
fn map_book_status(err: &BookError) -> StatusCode {
    match err {
        BookError::NotFound { .. } => StatusCode::NOT_FOUND,
        BookError::Validation { .. }
        | BookError::DuplicateIsbn { .. }
        | BookError::InvalidTransition { .. }
        | BookError::OutOfRange(_) => StatusCode::BAD_REQUEST,
        BookError::Conflict { .. } => StatusCode::CONFLICT,
        BookError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: BookError) -> (StatusCode, String) {
    (map_book_status(&err), err.to_string())
}

#[derive(Debug, Deserialize)]
struct ListParams {
    sort_by: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<BookPage>, (StatusCode, String)> {
    let sort_by = params.sort_by.unwrap_or_default();
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.default_page_size);

    state
        .queries
        .list_books(&sort_by, page, page_size)
        .await
        .map(Json)
        .map_err(reject)
}

async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, (StatusCode, String)> {
    state.queries.get_book(id).await.map(Json).map_err(reject)
}

#[derive(Debug, Deserialize)]
struct CreateBookRequest {
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    status: BookStatus,
}

async fn create_book(
    State(state): State<AppState>,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), (StatusCode, String)> {
    let new_book = NewBook {
        title: req.title,
        author: req.author,
        isbn: req.isbn,
        status: req.status,
    };

    state
        .commands
        .create_book(new_book)
        .await
        .map(|book| (StatusCode::CREATED, Json(book)))
        .map_err(reject)
}

#[derive(Debug, Deserialize)]
struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    status: Option<BookStatus>,
    /// Version token the caller loaded; a stale value is rejected with 409.
    expected_version: Option<VersionToken>,
}

async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let patch = BookPatch {
        title: req.title,
        author: req.author,
        status: req.status,
    };

    state
        .commands
        .update_book(id, patch, req.expected_version.as_ref())
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(reject)
}

async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .commands
        .delete_book(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(reject)
}
