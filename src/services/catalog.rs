//! Catalog service - validation and orchestration over the entity stores
//!
//! Every mutating operation performs its validation reads first and issues
//! at most one store write, so a failed precondition leaves no partial
//! state. Validation order in create_book is fixed: ISBN collision, then
//! author, then publisher; the first failure short-circuits the remaining
//! lookups.

use std::sync::Arc;

use sea_orm::Set;

use crate::domain::{
    AuthorDto, AuthorRepository, BookDto, BookRepository, CreateBookRequest, DomainError,
    EntityKind, PublisherRepository, UpdateBookRequest,
};
use crate::models::book;
use crate::services::mapper;

pub struct CatalogService {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    publishers: Arc<dyn PublisherRepository>,
}

impl CatalogService {
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        publishers: Arc<dyn PublisherRepository>,
    ) -> Self {
        Self {
            books,
            authors,
            publishers,
        }
    }

    /// Create a new book, returning its assigned ID
    pub async fn create_book(&self, request: CreateBookRequest) -> Result<i32, DomainError> {
        if self.books.find_by_isbn(&request.isbn).await?.is_some() {
            return Err(DomainError::duplicate(format!(
                "Book with ISBN {} already exists",
                request.isbn
            )));
        }

        let author = self
            .authors
            .find_by_id(request.author_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Author, request.author_id))?;

        let publisher = self
            .publishers
            .find_by_id(request.publisher_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Publisher, request.publisher_id))?;

        let mut new_book = mapper::book_from_request(&request);
        new_book.author_id = Set(author.id);
        new_book.publisher_id = Set(publisher.id);

        let created = self.books.create(new_book).await?;
        tracing::info!(book_id = created.id, isbn = %created.isbn, "Book created");

        Ok(created.id)
    }

    /// Get a book by ID with resolved author and publisher names
    pub async fn get_book(&self, id: i32) -> Result<BookDto, DomainError> {
        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Book, id))?;

        let author = self.authors.find_by_id(book.author_id).await?;
        let publisher = self.publishers.find_by_id(book.publisher_id).await?;

        Ok(mapper::to_book_dto(&book, author.as_ref(), publisher.as_ref()))
    }

    /// Apply a partial update to a book. A publisher reassignment is
    /// validated before any field is applied.
    pub async fn update_book(
        &self,
        id: i32,
        request: UpdateBookRequest,
    ) -> Result<(), DomainError> {
        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Book, id))?;

        let mut active: book::ActiveModel = book.into();

        if let Some(publisher_id) = request.publisher_id {
            let publisher = self
                .publishers
                .find_by_id(publisher_id)
                .await?
                .ok_or_else(|| DomainError::not_found(EntityKind::Publisher, publisher_id))?;
            active.publisher_id = Set(publisher.id);
        }

        mapper::apply_update(&mut active, &request);
        self.books.update(active).await?;

        tracing::info!(book_id = id, "Book updated");
        Ok(())
    }

    /// All books by an author, in the store's natural listing order. The
    /// author check comes first; on a miss the book store is never queried.
    pub async fn get_books_by_author(&self, author_id: i32) -> Result<Vec<BookDto>, DomainError> {
        let author = self
            .authors
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Author, author_id))?;

        let books = self.books.find_all_by_author_id(author_id).await?;

        let mut dtos = Vec::with_capacity(books.len());
        for book in books {
            let publisher = self.publishers.find_by_id(book.publisher_id).await?;
            dtos.push(mapper::to_book_dto(&book, Some(&author), publisher.as_ref()));
        }

        Ok(dtos)
    }

    /// An author with its aggregated book count, fetched in one round trip
    pub async fn get_author_with_books(&self, author_id: i32) -> Result<AuthorDto, DomainError> {
        let with_books = self
            .authors
            .find_by_id_with_books(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Author, author_id))?;

        Ok(mapper::to_author_dto(&with_books.author, &with_books.books))
    }

    /// Delete a book. The existence check gates the delete call: no delete
    /// is issued for an unknown ID.
    pub async fn delete_book(&self, id: i32) -> Result<(), DomainError> {
        if !self.books.exists_by_id(id).await? {
            return Err(DomainError::not_found(EntityKind::Book, id));
        }

        self.books.delete_by_id(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
