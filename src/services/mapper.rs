//! Pure mapping between request/response shapes and book entities
//!
//! No side effects and no error cases; the catalog service resolves the
//! references these functions need and wires author/publisher after
//! validation.

use sea_orm::Set;

use crate::domain::{AuthorDto, BookDto, CreateBookRequest, UpdateBookRequest};
use crate::models::{author, book, publisher};

/// Scalar fields 1:1 from the request. Author and publisher are left unset:
/// the service attaches them once both references have been validated.
pub fn book_from_request(request: &CreateBookRequest) -> book::ActiveModel {
    book::ActiveModel {
        title: Set(request.title.clone()),
        isbn: Set(request.isbn.clone()),
        publication_year: Set(request.publication_year),
        available_copies: Set(request.available_copies),
        price: Set(request.price),
        genre: Set(request.genre),
        ..Default::default()
    }
}

/// External representation of a book. Display names are derived only when
/// the reference is present.
pub fn to_book_dto(
    book: &book::Model,
    author: Option<&author::Model>,
    publisher: Option<&publisher::Model>,
) -> BookDto {
    BookDto {
        id: book.id,
        title: book.title.clone(),
        isbn: book.isbn.clone(),
        publication_year: book.publication_year,
        available_copies: book.available_copies,
        price: book.price,
        genre: book.genre,
        author_name: author.map(|a| format!("{} {}", a.first_name, a.last_name)),
        publisher_name: publisher.map(|p| p.name.clone()),
    }
}

/// External representation of an author; `total_books` is the size of the
/// associated set, 0 for an empty one.
pub fn to_author_dto(author: &author::Model, books: &[book::Model]) -> AuthorDto {
    AuthorDto {
        id: author.id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        email: author.email.clone(),
        country: author.country.clone(),
        total_books: books.len() as i32,
    }
}

/// Apply the present fields of a partial update over the target book.
/// Absent fields are no-ops.
pub fn apply_update(book: &mut book::ActiveModel, request: &UpdateBookRequest) {
    if let Some(title) = &request.title {
        book.title = Set(title.clone());
    }
    if let Some(available_copies) = request.available_copies {
        book.available_copies = Set(available_copies);
    }
    if let Some(price) = request.price {
        book.price = Set(price);
    }
}
