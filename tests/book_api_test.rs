//! HTTP surface tests.
//!
//! Spins up the real axum server on an unused port and drives it with
//! reqwest, checking the transport contract: status codes per error kind
//! and the literal error message bodies callers depend on.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use shelfmark::config::AppConfig;
use shelfmark::server::{build_router, AppState};
use shelfmark::{Book, BookStatus, InMemoryBookStore};

async fn spawn_server() -> String {
    let config = AppConfig::default();
    let store = Arc::new(InMemoryBookStore::new());
    let state = AppState::new(store, &config);
    let router = build_router(state);

    let port = portpicker::pick_unused_port().expect("no free port");
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{base}/books"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

fn book_payload(title: &str, isbn: &str, status: &str) -> Value {
    json!({
        "title": title,
        "author": "Author",
        "isbn": isbn,
        "status": status,
    })
}

#[tokio::test]
async fn create_returns_201_with_the_stored_record() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = create(
        &client,
        &base,
        json!({ "title": "New Book", "author": "New Author", "isbn": "ISBN-NEW" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let book: Book = resp.json().await.unwrap();
    assert!(book.id > 0);
    assert_eq!(book.title, "New Book");
    // Status defaults to OnShelf when the caller supplies none
    assert_eq!(book.status, BookStatus::OnShelf);
}

#[tokio::test]
async fn duplicate_isbn_is_a_bad_request() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create(&client, &base, book_payload("Book A", "ISBN-A", "OnShelf")).await;
    let resp = create(&client, &base, book_payload("Book B", "ISBN-A", "OnShelf")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.text().await.unwrap();
    assert!(body.contains("ISBN-A"), "body: {body}");
}

#[tokio::test]
async fn get_book_round_trips_and_missing_id_is_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Book = create(&client, &base, book_payload("Book A", "ISBN-A", "OnShelf"))
        .await
        .json()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/books/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Book = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    let resp = client
        .get(format!("{base}/books/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_sorts_and_paginates() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for (title, isbn) in [("Delta", "4"), ("Alpha", "1"), ("Charlie", "3"), ("Bravo", "2")] {
        create(&client, &base, book_payload(title, isbn, "OnShelf")).await;
    }

    let resp = client
        .get(format!("{base}/books?sort_by=title&page=2&page_size=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["total_items"], 4);
    assert_eq!(page["page"], 2);
    assert_eq!(page["page_size"], 2);

    let titles: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Charlie", "Delta"]);
}

#[tokio::test]
async fn zero_page_is_a_bad_request_with_the_contract_message() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/books?page=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "Page must be greater than zero.");

    let resp = client
        .get(format!("{base}/books?page_size=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.text().await.unwrap(),
        "Page size must be greater than zero."
    );
}

#[tokio::test]
async fn invalid_transition_is_a_bad_request_with_the_contract_message() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Book = create(&client, &base, book_payload("Book B", "ISBN-B", "Borrowed"))
        .await
        .json()
        .await
        .unwrap();

    let resp = client
        .put(format!("{base}/books/{}", created.id))
        .json(&json!({ "status": "Damaged" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.text().await.unwrap(),
        "Invalid status change from Borrowed to Damaged"
    );
}

#[tokio::test]
async fn valid_update_returns_204_and_advances_the_version() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Book = create(&client, &base, book_payload("Book B", "ISBN-B", "Borrowed"))
        .await
        .json()
        .await
        .unwrap();

    let resp = client
        .put(format!("{base}/books/{}", created.id))
        .json(&json!({ "status": "Returned" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let fetched: Book = client
        .get(format!("{base}/books/{}", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.status, BookStatus::Returned);
    assert_ne!(fetched.version, created.version);
}

#[tokio::test]
async fn stale_expected_version_is_a_conflict() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Book = create(&client, &base, book_payload("Book D", "ISBN-D", "OnShelf"))
        .await
        .json()
        .await
        .unwrap();

    // First writer commits with the token it loaded
    let resp = client
        .put(format!("{base}/books/{}", created.id))
        .json(&json!({ "status": "Borrowed", "expected_version": created.version }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Second writer presents the now-stale token
    let resp = client
        .put(format!("{base}/books/{}", created.id))
        .json(&json!({ "title": "Renamed", "expected_version": created.version }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Book = create(&client, &base, book_payload("Book F", "ISBN-F", "OnShelf"))
        .await
        .json()
        .await
        .unwrap();

    let url = format!("{base}/books/{}", created.id);
    let resp = client.delete(&url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client.delete(&url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
