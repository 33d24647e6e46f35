use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::publisher;

#[derive(Deserialize, ToSchema)]
pub struct CreatePublisherRequest {
    pub name: String,
    pub address: String,
    pub website: String,
}

#[utoipa::path(
    get,
    path = "/api/publishers",
    responses((status = 200, description = "All publishers"))
)]
pub async fn list_publishers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DomainError> {
    let publishers = state.publisher_repo.find_all().await?;
    Ok(Json(publishers))
}

#[utoipa::path(
    post,
    path = "/api/publishers",
    request_body = CreatePublisherRequest,
    responses((status = 201, description = "Publisher created"))
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    Json(payload): Json<CreatePublisherRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let publisher = state
        .publisher_repo
        .create(publisher::ActiveModel {
            name: Set(payload.name),
            address: Set(payload.address),
            website: Set(payload.website),
            ..Default::default()
        })
        .await?;

    Ok((StatusCode::CREATED, Json(publisher)))
}
