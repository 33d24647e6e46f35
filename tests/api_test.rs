use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

use libris::api;
use libris::db;
use libris::infrastructure::AppState;

// Helper to build the API router over an in-memory database
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    api::api_router(AppState::new(db))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("PUT")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}

async fn create_author(app: &Router, first_name: &str, last_name: &str) -> i32 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/authors",
            json!({
                "first_name": first_name,
                "last_name": last_name,
                "email": format!("{}@gmail.com", first_name.to_lowercase()),
                "country": "Rwanda"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap() as i32
}

async fn create_publisher(app: &Router, name: &str) -> i32 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/publishers",
            json!({
                "name": name,
                "address": "USA",
                "website": "https://amazon.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap() as i32
}

fn book_payload(isbn: &str, author_id: i32, publisher_id: i32) -> Value {
    json!({
        "title": "Master System Design",
        "isbn": isbn,
        "publication_year": 2026,
        "available_copies": 200,
        "price": 49.9,
        "genre": "SCIENCE",
        "author_id": author_id,
        "publisher_id": publisher_id
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let app = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "libris");
}

#[tokio::test]
async fn book_lifecycle_roundtrip() {
    let app = setup_app().await;
    let author_id = create_author(&app, "John", "Doe").await;
    let publisher_id = create_publisher(&app, "Amazon").await;

    // Create
    let response = app
        .clone()
        .oneshot(post_json(
            "/books",
            book_payload("5155172381", author_id, publisher_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let book_id = body_json(response).await["id"].as_i64().unwrap();

    // Read
    let response = app
        .clone()
        .oneshot(get(&format!("/books/{}", book_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Master System Design");
    assert_eq!(body["isbn"], "5155172381");
    assert_eq!(body["available_copies"], 200);
    assert_eq!(body["price"].as_f64().unwrap(), 49.9);
    assert_eq!(body["genre"], "SCIENCE");
    assert_eq!(body["author_name"], "John Doe");
    assert_eq!(body["publisher_name"], "Amazon");

    // Partial update: only the price changes
    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/books/{}", book_id),
            json!({ "price": 99.9 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/books/{}", book_id)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["price"].as_f64().unwrap(), 99.9);
    assert_eq!(body["title"], "Master System Design");
    assert_eq!(body["available_copies"], 200);
    assert_eq!(body["publisher_name"], "Amazon");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/books/{}", book_id))
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get(&format!("/books/{}", book_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_isbn_returns_conflict() {
    let app = setup_app().await;
    let author_id = create_author(&app, "John", "Doe").await;
    let publisher_id = create_publisher(&app, "Amazon").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/books",
            book_payload("5155172381", author_id, publisher_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json(
            "/books",
            book_payload("5155172381", author_id, publisher_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Book with ISBN 5155172381 already exists");
}

#[tokio::test]
async fn unknown_references_return_not_found() {
    let app = setup_app().await;
    let author_id = create_author(&app, "John", "Doe").await;

    // Missing book
    let response = app.clone().oneshot(get("/books/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Missing publisher on create
    let response = app
        .clone()
        .oneshot(post_json("/books", book_payload("5155172381", author_id, 999)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Publisher not found with id: 999");

    // Missing author on create
    let response = app
        .clone()
        .oneshot(post_json("/books", book_payload("5155172381", 999, 1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Missing author on the by-author listing
    let response = app.oneshot(get("/authors/999/books")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_endpoint_reports_book_count() {
    let app = setup_app().await;
    let author_id = create_author(&app, "John", "Doe").await;
    let publisher_id = create_publisher(&app, "Amazon").await;

    // No books yet
    let response = app
        .clone()
        .oneshot(get(&format!("/authors/{}", author_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_books"], 0);
    assert_eq!(body["first_name"], "John");

    for isbn in ["1111111111", "2222222222"] {
        let response = app
            .clone()
            .oneshot(post_json("/books", book_payload(isbn, author_id, publisher_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get(&format!("/authors/{}", author_id)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_books"], 2);

    let response = app
        .oneshot(get(&format!("/authors/{}/books", author_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["author_name"], "John Doe");
}
