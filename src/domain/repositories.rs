//! Repository trait definitions
//!
//! These traits define the contract for data access. Implementations live
//! in the infrastructure layer; tests substitute their own.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{author, book, publisher};

/// An author together with every book referencing it, fetched in a single
/// round trip. The eager load is part of the contract: callers must not pay
/// a per-book query.
#[derive(Debug)]
pub struct AuthorWithBooks {
    pub author: author::Model,
    pub books: Vec<book::Model>,
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, DomainError>;

    /// Find a book by its ISBN (unique across all books)
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<book::Model>, DomainError>;

    /// Every book referencing the given author, in the store's natural order
    async fn find_all_by_author_id(&self, author_id: i32)
        -> Result<Vec<book::Model>, DomainError>;

    /// Whether a book with this ID exists
    async fn exists_by_id(&self, id: i32) -> Result<bool, DomainError>;

    /// Insert a new book, returning the stored row with its assigned ID
    async fn create(&self, book: book::ActiveModel) -> Result<book::Model, DomainError>;

    /// Persist changes to an existing book
    async fn update(&self, book: book::ActiveModel) -> Result<book::Model, DomainError>;

    /// Delete a book by ID
    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors
    async fn find_all(&self) -> Result<Vec<author::Model>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<author::Model>, DomainError>;

    /// Find an author and its books in one query
    async fn find_by_id_with_books(&self, id: i32)
        -> Result<Option<AuthorWithBooks>, DomainError>;

    /// Create a new author
    async fn create(&self, author: author::ActiveModel) -> Result<author::Model, DomainError>;
}

/// Repository trait for Publisher entity
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Find all publishers
    async fn find_all(&self) -> Result<Vec<publisher::Model>, DomainError>;

    /// Find a publisher by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<publisher::Model>, DomainError>;

    /// Create a new publisher
    async fn create(
        &self,
        publisher: publisher::ActiveModel,
    ) -> Result<publisher::Model, DomainError>;
}
