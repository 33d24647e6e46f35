//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{AuthorRepository, AuthorWithBooks, DomainError};
use crate::models::author::{self, Entity as AuthorEntity};
use crate::models::book;

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<author::Model>, DomainError> {
        Ok(AuthorEntity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<author::Model>, DomainError> {
        Ok(AuthorEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_id_with_books(
        &self,
        id: i32,
    ) -> Result<Option<AuthorWithBooks>, DomainError> {
        // Single JOIN round trip; the book set comes back with the author
        let mut rows = AuthorEntity::find_by_id(id)
            .find_with_related(book::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .pop()
            .map(|(author, books)| AuthorWithBooks { author, books }))
    }

    async fn create(&self, mut author: author::ActiveModel) -> Result<author::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        author.created_at = Set(now.clone());
        author.updated_at = Set(now);

        Ok(author.insert(&self.db).await?)
    }
}
