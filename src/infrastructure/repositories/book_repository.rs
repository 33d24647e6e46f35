//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::{BookRepository, DomainError};
use crate::models::book::{self, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<book::Model>, DomainError> {
        Ok(BookEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<book::Model>, DomainError> {
        Ok(BookEntity::find()
            .filter(Column::Isbn.eq(isbn))
            .one(&self.db)
            .await?)
    }

    async fn find_all_by_author_id(
        &self,
        author_id: i32,
    ) -> Result<Vec<book::Model>, DomainError> {
        // No ORDER BY: callers get the store's natural listing order
        Ok(BookEntity::find()
            .filter(Column::AuthorId.eq(author_id))
            .all(&self.db)
            .await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, DomainError> {
        let count = BookEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, mut book: book::ActiveModel) -> Result<book::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        book.created_at = Set(now.clone());
        book.updated_at = Set(now);

        Ok(book.insert(&self.db).await?)
    }

    async fn update(&self, mut book: book::ActiveModel) -> Result<book::Model, DomainError> {
        book.updated_at = Set(chrono::Utc::now().to_rfc3339());

        Ok(book.update(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        BookEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
