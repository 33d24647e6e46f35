use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::domain::{BookDto, CreateBookRequest, DomainError, UpdateBookRequest};
use crate::infrastructure::AppState;

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created, body carries the new id"),
        (status = 404, description = "Author or publisher does not exist"),
        (status = 409, description = "A book with this ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let id = state.catalog.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = BookDto),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BookDto>, DomainError> {
    let book = state.catalog.get_book(id).await?;
    Ok(Json(book))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated"),
        (status = 404, description = "Book or new publisher does not exist")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<impl IntoResponse, DomainError> {
    state.catalog.update_book(id, request).await?;
    Ok(Json(json!({ "message": "Book updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, DomainError> {
    state.catalog.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}/books",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Every book by this author", body = [BookDto]),
        (status = 404, description = "No author with this id")
    )
)]
pub async fn list_books_by_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<BookDto>>, DomainError> {
    let books = state.catalog.get_books_by_author(id).await?;
    Ok(Json(books))
}
