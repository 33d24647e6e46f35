use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{AuthorDto, DomainError};
use crate::infrastructure::AppState;
use crate::models::author;

#[derive(Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}

#[utoipa::path(
    get,
    path = "/api/authors",
    responses((status = 200, description = "All authors"))
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DomainError> {
    let authors = state.author_repo.find_all().await?;
    Ok(Json(authors))
}

#[utoipa::path(
    post,
    path = "/api/authors",
    request_body = CreateAuthorRequest,
    responses((status = 201, description = "Author created"))
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let author = state
        .author_repo
        .create(author::ActiveModel {
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            country: Set(payload.country),
            ..Default::default()
        })
        .await?;

    Ok((StatusCode::CREATED, Json(author)))
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author with its book count", body = AuthorDto),
        (status = 404, description = "No author with this id")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AuthorDto>, DomainError> {
    let author = state.catalog.get_author_with_books(id).await?;
    Ok(Json(author))
}
