//! Request and response shapes for the catalog operations

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::book::BookGenre;

/// Payload for creating a book. All fields are required; author and
/// publisher are referenced by ID and validated before anything is written.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub available_copies: i32,
    pub price: f64,
    pub genre: BookGenre,
    pub author_id: i32,
    pub publisher_id: i32,
}

/// Partial update for a book. `Some` means "set this field", `None` means
/// "leave it untouched" — none of these fields are clearable, so a plain
/// `Option` carries the presence distinction. ISBN, genre, and publication
/// year are immutable after creation and deliberately have no field here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub available_copies: Option<i32>,
    pub price: Option<f64>,
    pub publisher_id: Option<i32>,
}

/// External representation of a book, with author and publisher resolved to
/// display names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub available_copies: i32,
    pub price: f64,
    pub genre: BookGenre,
    pub author_name: Option<String>,
    pub publisher_name: Option<String>,
}

/// External representation of an author with its aggregated book count.
/// `total_books` is always present; an author without books reports 0.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub total_books: i32,
}
